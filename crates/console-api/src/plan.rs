//! Plan catalog endpoint.

use console_model::Plan;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::endpoints::PLAN_GET_ALL;
use crate::error::ApiResult;
use crate::transport::{decode, Transport};

/// Plan endpoint wrapper.
#[derive(Clone)]
pub struct PlanApi {
    transport: Arc<dyn Transport>,
}

impl PlanApi {
    /// Create a wrapper over the shared transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch every purchasable plan.
    #[instrument(skip(self))]
    pub async fn get_all_plans(&self) -> ApiResult<Vec<Plan>> {
        let body = self.transport.get(PLAN_GET_ALL).await?;
        let plans: Vec<Plan> = decode(body)?;
        debug!("Fetched {} plans", plans.len());
        Ok(plans)
    }
}
