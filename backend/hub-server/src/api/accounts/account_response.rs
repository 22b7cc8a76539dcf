use crate::AccountDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: AccountDto,
}
