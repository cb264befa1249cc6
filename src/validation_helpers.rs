use cosmwasm_std::{Addr, Deps, StdError, StdResult};

use crate::constants::MAX_PAGE_LIMIT;
use crate::error::ContractError;
use crate::types::alliance_entity::AllianceEntity;

pub fn assert_entity_id_is_valid(alliance_entity: &AllianceEntity) -> Result<(), ContractError> {
    if alliance_entity.is_valid() {
        Ok(())
    } else {
        Err(ContractError::CustomError {
            val: format!(
                "alliance entity id must be {} bytes, got {}",
                AllianceEntity::LENGTH,
                alliance_entity.len()
            ),
        })
    }
}

pub fn assert_owner_address_is_valid(
    deps: Deps,
    alliance_owner: &Addr,
) -> Result<(), ContractError> {
    deps.api.addr_validate(alliance_owner.as_str())?;
    Ok(())
}

pub fn assert_page_limit_is_valid(limit: Option<u16>) -> StdResult<()> {
    if limit.unwrap_or(0) > MAX_PAGE_LIMIT {
        return Err(StdError::generic_err(format!(
            "limit cannot be greater than {}.",
            MAX_PAGE_LIMIT
        )));
    }
    Ok(())
}
