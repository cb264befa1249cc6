use std::collections::HashSet;

use cosmwasm_schema::cw_serde;

use crate::constants::{
    ALLIANCE_COLLECTED_FEE_TABLE, ALLIANCE_FEE_TABLE, NAMESPACE, SYSTEM_NAME,
};
use crate::error::ContractError;

/// Primitive field types a table schema can declare.
#[cw_serde]
#[derive(Copy)]
pub enum FieldType {
    Bytes32,
    Address,
    Uint256,
}

#[cw_serde]
pub struct TableField {
    pub name: String,
    pub field_type: FieldType,
}

#[cw_serde]
pub struct TableConfig {
    pub name: String,
    pub key: Vec<String>,
    pub schema: Vec<TableField>,
}

impl TableConfig {
    pub fn field(&self, name: &str) -> Option<&TableField> {
        self.schema.iter().find(|field| field.name == name)
    }

    fn validate(&self) -> Result<(), ContractError> {
        if self.key.is_empty() {
            return Err(ContractError::CustomError {
                val: format!("table {} must declare at least one key field", self.name),
            });
        }

        let mut field_names = HashSet::new();
        for field in &self.schema {
            if !field_names.insert(field.name.as_str()) {
                return Err(ContractError::CustomError {
                    val: format!(
                        "duplicate field name {} in table {}",
                        field.name, self.name
                    ),
                });
            }
        }

        for key_field in &self.key {
            if self.field(key_field).is_none() {
                return Err(ContractError::CustomError {
                    val: format!(
                        "key field {} of table {} is not part of its schema",
                        key_field, self.name
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cw_serde]
pub struct SystemConfig {
    pub name: String,
    pub open_access: bool,
}

/// Declares a namespace, the systems registered under it, and the record
/// tables those systems read and write. Field order in each table schema is
/// part of the declaration.
#[cw_serde]
pub struct WorldConfig {
    pub namespace: String,
    pub systems: Vec<SystemConfig>,
    pub tables: Vec<TableConfig>,
}

impl WorldConfig {
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        if self.namespace.is_empty() {
            return Err(ContractError::CustomError {
                val: "namespace must not be empty".to_string(),
            });
        }

        if self.systems.is_empty() {
            return Err(ContractError::CustomError {
                val: "at least one system must be registered".to_string(),
            });
        }

        let mut system_names = HashSet::new();
        for system in &self.systems {
            if !system_names.insert(system.name.as_str()) {
                return Err(ContractError::CustomError {
                    val: format!("duplicate system name: {}", system.name),
                });
            }
        }

        let mut table_names = HashSet::new();
        for table in &self.tables {
            if !table_names.insert(table.name.as_str()) {
                return Err(ContractError::CustomError {
                    val: format!("duplicate table name: {}", table.name),
                });
            }
            table.validate()?;
        }

        Ok(())
    }
}

/// The canonical declaration this contract registers at instantiation.
pub fn world_config() -> WorldConfig {
    WorldConfig {
        namespace: NAMESPACE.to_string(),
        systems: vec![SystemConfig {
            name: SYSTEM_NAME.to_string(),
            open_access: true,
        }],
        tables: vec![
            TableConfig {
                name: ALLIANCE_FEE_TABLE.to_string(),
                key: vec!["allianceEntity".to_string()],
                schema: vec![
                    TableField {
                        name: "allianceEntity".to_string(),
                        field_type: FieldType::Bytes32,
                    },
                    TableField {
                        name: "allianceOwner".to_string(),
                        field_type: FieldType::Address,
                    },
                    TableField {
                        name: "entranceFee".to_string(),
                        field_type: FieldType::Uint256,
                    },
                ],
            },
            TableConfig {
                name: ALLIANCE_COLLECTED_FEE_TABLE.to_string(),
                key: vec!["allianceEntity".to_string()],
                schema: vec![
                    TableField {
                        name: "allianceEntity".to_string(),
                        field_type: FieldType::Bytes32,
                    },
                    TableField {
                        name: "collectedEntranceFee".to_string(),
                        field_type: FieldType::Uint256,
                    },
                ],
            },
        ],
    }
}
