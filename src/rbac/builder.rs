use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    rbac::{Permission, RbacCatalog, Role, RoleTable, User},
    DefaultValidator, Error, RecordValidator, Registry, Result,
};

/// Builds an `RbacCatalog` from a JSON document:
///
/// ```json
/// {
///     "users": [{ "id": "Alice", "role": "Student" }],
///     "roles": { "Student": ["View_Assignment"] }
/// }
/// ```
pub struct RbacBuilder<V> {
    validator: V,
    json: String,
}

impl RbacBuilder<DefaultValidator> {
    pub fn from_json(json: &str) -> Self {
        Self {
            json: json.into(),
            validator: DefaultValidator,
        }
    }
}

impl<V> RbacBuilder<V>
where
    V: RecordValidator,
{
    pub fn with_validator<W>(self, validator: W) -> RbacBuilder<W>
    where
        W: RecordValidator,
    {
        RbacBuilder {
            json: self.json,
            validator,
        }
    }

    pub fn build(self) -> Result<RbacCatalog> {
        let definition: RbacDefinition =
            serde_json::from_str(&self.json).map_err(Error::Deserializing)?;

        let mut users = Vec::with_capacity(definition.users.len());
        for user in definition.users {
            let user: User = user.into();
            self.validator.validate_user(&user)?;
            users.push(user);
        }

        let mut roles = RoleTable::new();
        for (role, permissions) in definition.roles {
            for permission in permissions {
                let permission = Permission::new(permission);
                self.validator.validate_permission(role, &permission)?;
                roles.grant(role, permission);
            }
        }

        Ok(RbacCatalog::new(Registry::from_records(users)?, roles))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RbacDefinition {
    users: Vec<UserDefinition>,
    #[serde(default)]
    roles: BTreeMap<Role, Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDefinition {
    id: String,
    role: Role,
}

impl From<UserDefinition> for User {
    fn from(definition: UserDefinition) -> Self {
        User::new(definition.id, definition.role)
    }
}
