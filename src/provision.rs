//! Provisioning SQL for the auxiliary service databases.
//!
//! The scripts under `db/init/` are run once by Postgres at first start. They
//! are plain files so the database image can mount them, and this module
//! renders the same text so their shape stays under test.

use thiserror::Error;

pub const ADMIN_ROLE: &str = "supabase_admin";

/// Databases created at environment initialization, in script order.
pub const SERVICE_DATABASES: [&str; 2] = ["n8n", "langfuse"];

// Postgres truncates identifiers past this length.
const MAX_IDENTIFIER_LEN: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProvisionError {
    #[error("invalid identifier {0:?}: expected [a-z_][a-z0-9_]*, at most 63 bytes")]
    InvalidIdentifier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionScript {
    database: String,
    admin_role: String,
}

impl ProvisionScript {
    pub fn new(database: &str, admin_role: &str) -> Result<Self, ProvisionError> {
        Ok(Self {
            database: validate_identifier(database)?.to_string(),
            admin_role: validate_identifier(admin_role)?.to_string(),
        })
    }

    pub fn for_service(database: &str) -> Result<Self, ProvisionError> {
        Self::new(database, ADMIN_ROLE)
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// File name under `db/init/`, numbered by position.
    pub fn file_name(&self, position: usize) -> String {
        format!("{:02}-create-{}-db.sql", position + 1, self.database)
    }

    pub fn render(&self) -> String {
        let db = &self.database;
        let role = &self.admin_role;

        format!(
            r"-- Dedicated database for {db}.
CREATE DATABASE {db};
GRANT ALL PRIVILEGES ON DATABASE {db} TO {role};

\connect {db}
GRANT ALL ON SCHEMA public TO {role};
"
        )
    }
}

/// Scripts for every auxiliary service, in run order.
pub fn service_scripts() -> Result<Vec<ProvisionScript>, ProvisionError> {
    SERVICE_DATABASES
        .iter()
        .map(|db| ProvisionScript::for_service(db))
        .collect()
}

fn validate_identifier(ident: &str) -> Result<&str, ProvisionError> {
    let mut chars = ident.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if head_ok && tail_ok && ident.len() <= MAX_IDENTIFIER_LEN {
        Ok(ident)
    } else {
        Err(ProvisionError::InvalidIdentifier(ident.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKED_IN: [&str; 2] = [
        include_str!("../db/init/01-create-n8n-db.sql"),
        include_str!("../db/init/02-create-langfuse-db.sql"),
    ];

    #[test]
    fn checked_in_scripts_match_rendered() {
        let scripts = service_scripts().unwrap();
        assert_eq!(scripts.len(), CHECKED_IN.len());
        for (script, file) in scripts.iter().zip(CHECKED_IN) {
            assert_eq!(script.render(), file, "drift in {}", script.database());
        }
    }

    #[test]
    fn file_names_are_numbered() {
        let scripts = service_scripts().unwrap();
        assert_eq!(scripts[0].file_name(0), "01-create-n8n-db.sql");
        assert_eq!(scripts[1].file_name(1), "02-create-langfuse-db.sql");
    }

    #[test]
    fn grants_target_admin_role() {
        let sql = ProvisionScript::for_service("n8n").unwrap().render();
        assert!(sql.contains("CREATE DATABASE n8n;"));
        assert!(sql.contains("GRANT ALL PRIVILEGES ON DATABASE n8n TO supabase_admin;"));
        assert!(sql.contains("GRANT ALL ON SCHEMA public TO supabase_admin;"));
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        let long = "a".repeat(64);
        for bad in ["", "1db", "Upper", "db; DROP TABLE x", "with-dash", long.as_str()] {
            assert_eq!(
                ProvisionScript::for_service(bad),
                Err(ProvisionError::InvalidIdentifier(bad.to_string())),
            );
        }
        assert!(ProvisionScript::new("ok_db", "bad role").is_err());
    }
}
