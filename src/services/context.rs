use uuid::Uuid;

use crate::db::enums::EmployeeRole;
use crate::db::models::auth::AuthEmployee;

/// Authenticated identity threaded explicitly through the service layer.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub employee_id: Uuid,
    pub role: EmployeeRole,
}

impl From<&AuthEmployee> for RequestContext {
    fn from(auth: &AuthEmployee) -> Self {
        Self {
            employee_id: auth.id,
            role: auth.role.clone(),
        }
    }
}
