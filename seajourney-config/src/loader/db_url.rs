use url::Url;

use crate::{
    ConfigLoadError,
    constants::DEFAULT_DATABASE_PORT,
    models::sources::{EnvConfig, FileDatabaseConfig},
    util::read_secret_file,
};

/// Resolve the PostgreSQL connection URL for the subscriptions table.
///
/// Precedence: `DATABASE_URL`, then `DATABASE_URL_FILE`, then the file's
/// `database.url` (with a password spliced in when the URL has none), then a
/// URL assembled from `DATABASE_HOST`/`DATABASE_USER`/`DATABASE_NAME`.
pub fn resolve_database_url(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(url) = env.database_url.clone() {
        return Ok(Some(url));
    }

    if let Some(path) = env.database_url_file.as_ref()
        && let Some(url) = read_secret_file(path)?
    {
        return Ok(Some(url));
    }

    if let Some(stored) = file_database
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        let mut parsed = Url::parse(stored)
            .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
        if parsed.password().is_none()
            && let Some(password) = resolve_database_password(env, file_database)?
        {
            parsed
                .set_password(Some(&password))
                .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
        }
        return Ok(Some(parsed.to_string()));
    }

    let (Some(host), Some(user), Some(name)) = (
        env.database_host.as_deref(),
        env.database_user.as_deref(),
        env.database_name.as_deref(),
    ) else {
        return Ok(None);
    };

    let port = env.database_port.unwrap_or(DEFAULT_DATABASE_PORT);
    let mut url = Url::parse(&format!("postgresql://{host}:{port}/{name}"))
        .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
    url.set_username(user).map_err(|_| {
        ConfigLoadError::InvalidDatabaseUsername {
            username: user.to_string(),
        }
    })?;
    if let Some(password) = resolve_database_password(env, file_database)? {
        url.set_password(Some(&password))
            .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
    }
    Ok(Some(url.to_string()))
}

fn resolve_database_password(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(password) = env.database_password.clone() {
        return Ok(Some(password));
    }

    for path in [
        env.database_password_file.as_ref(),
        file_database.password_file.as_ref(),
    ]
    .into_iter()
    .flatten()
    {
        if let Some(secret) = read_secret_file(path)? {
            return Ok(Some(secret));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let env = EnvConfig {
            database_url: Some("postgresql://env@db/app".into()),
            database_host: Some("ignored".into()),
            ..EnvConfig::default()
        };
        let file = FileDatabaseConfig {
            url: Some("postgresql://file@db/app".into()),
            ..FileDatabaseConfig::default()
        };
        assert_eq!(
            resolve_database_url(&env, &file).unwrap().as_deref(),
            Some("postgresql://env@db/app")
        );
    }

    #[test]
    fn file_url_gets_password_from_secret_file() {
        let dir = tempfile::tempdir().unwrap();
        let secret = dir.path().join("pw");
        std::fs::write(&secret, "p@ss\n").unwrap();

        let env = EnvConfig::default();
        let file = FileDatabaseConfig {
            url: Some("postgresql://app@db:5432/seajourney".into()),
            password_file: Some(secret),
        };
        let url = resolve_database_url(&env, &file).unwrap().unwrap();
        assert_eq!(url, "postgresql://app:p%40ss@db:5432/seajourney");
    }

    #[test]
    fn parts_are_assembled_with_default_port() {
        let env = EnvConfig {
            database_host: Some("localhost".into()),
            database_user: Some("app".into()),
            database_name: Some("seajourney".into()),
            database_password: Some("pw".into()),
            ..EnvConfig::default()
        };
        let url = resolve_database_url(&env, &FileDatabaseConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(url, "postgresql://app:pw@localhost:5432/seajourney");
    }

    #[test]
    fn incomplete_parts_resolve_to_none() {
        let env = EnvConfig {
            database_host: Some("localhost".into()),
            ..EnvConfig::default()
        };
        assert!(
            resolve_database_url(&env, &FileDatabaseConfig::default())
                .unwrap()
                .is_none()
        );
    }
}
