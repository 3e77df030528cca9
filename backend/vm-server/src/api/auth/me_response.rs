use vm_auth::Claims;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Claims,
}
