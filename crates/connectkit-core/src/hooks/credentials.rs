//! Credential fields and the composite values derived from them
//!
//! Several connectors take credentials only as part of a larger value: a JAAS
//! login config for SASL, or a connection URI. The wizard shows the parts as
//! separate fields; on submission they are folded into the composite key and
//! removed from the map.
//!
//! Values that are secret references (`${provider:scope:key}`) are resolved by
//! the connector framework and are copied verbatim, never escaped or encoded.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;

use super::{inject, lookup};
use crate::config::is_blank;
use crate::error::{Error, Result};
use crate::model::{ComponentType, ConfigMap, ConfigType, ConfigurationEntry, Importance};

static SECRET_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$\{[^:{}]+:[^:{}]*:[^{}]+\}$").expect("secret reference pattern is valid")
});

/// Whether `value` is a `${provider:scope:key}` reference
pub fn is_secret_reference(value: &str) -> bool {
    SECRET_REFERENCE.is_match(value)
}

/// Scalar value of `key`; `None` when missing or blank
fn scalar(config: &ConfigMap, key: &str) -> Result<Option<String>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) if is_blank(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(_) => Err(Error::InvalidValueType {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

// =============================================================================
// Mirror SASL
// =============================================================================

/// SASL mechanism of the mirrored source cluster
pub const SASL_MECHANISM: &str = "source.cluster.sasl.mechanism";
/// Derived JAAS login configuration
pub const SASL_JAAS_CONFIG: &str = "source.cluster.sasl.jaas.config";
/// Synthetic SASL username
pub const SASL_USERNAME: &str = "source.cluster.sasl.username";
/// Synthetic SASL password
pub const SASL_PASSWORD: &str = "source.cluster.sasl.password";

const SECURITY_PROTOCOL: &str = "source.cluster.security.protocol";

/// SASL mechanisms with a known login module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaslMechanism {
    /// `PLAIN`
    Plain,
    /// `SCRAM-SHA-256`
    ScramSha256,
    /// `SCRAM-SHA-512`
    ScramSha512,
}

impl SaslMechanism {
    /// Mechanism name as the client expects it
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::ScramSha256 => "SCRAM-SHA-256",
            Self::ScramSha512 => "SCRAM-SHA-512",
        }
    }

    /// Fully qualified JAAS login module class
    pub fn login_module(self) -> &'static str {
        match self {
            Self::Plain => "org.apache.kafka.common.security.plain.PlainLoginModule",
            Self::ScramSha256 | Self::ScramSha512 => {
                "org.apache.kafka.common.security.scram.ScramLoginModule"
            }
        }
    }
}

impl FromStr for SaslMechanism {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PLAIN" => Ok(Self::Plain),
            "SCRAM-SHA-256" => Ok(Self::ScramSha256),
            "SCRAM-SHA-512" => Ok(Self::ScramSha512),
            other => Err(Error::UnsupportedValue {
                key: SASL_MECHANISM.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

fn jaas_quote(value: &str) -> String {
    if is_secret_reference(value) {
        return value.to_string();
    }
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// JAAS login config for `mechanism`
pub fn jaas_config(mechanism: SaslMechanism, username: &str, password: &str) -> String {
    format!(
        "{} required username=\"{}\" password=\"{}\";",
        mechanism.login_module(),
        jaas_quote(username),
        jaas_quote(password)
    )
}

/// Username and password fields for the source cluster
pub fn mirror_sasl_fields(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let entries = inject(
        entries,
        ConfigurationEntry::new(SASL_USERNAME, ConfigType::String)
            .with_display_name("Source cluster SASL username")
            .with_importance(Importance::High),
        config,
    );
    inject(
        entries,
        ConfigurationEntry::new(SASL_PASSWORD, ConfigType::Password)
            .with_display_name("Source cluster SASL password")
            .with_importance(Importance::High)
            .with_component(ComponentType::Password),
        config,
    )
}

/// Derive the JAAS config from mechanism and credentials
pub fn mirror_sasl_jaas(mut config: ConfigMap) -> Result<ConfigMap> {
    let username = scalar(&config, SASL_USERNAME)?;
    let password = scalar(&config, SASL_PASSWORD)?;
    let is_sasl = scalar(&config, SECURITY_PROTOCOL)?.is_some_and(|p| p.starts_with("SASL_"));

    if is_sasl && scalar(&config, SASL_JAAS_CONFIG)?.is_none() {
        if let (Some(username), Some(password)) = (username, password) {
            let mechanism: SaslMechanism = scalar(&config, SASL_MECHANISM)?
                .as_deref()
                .unwrap_or(SaslMechanism::Plain.as_str())
                .parse()?;
            tracing::debug!(mechanism = mechanism.as_str(), "deriving SASL JAAS config");
            config.insert(
                SASL_MECHANISM.to_string(),
                Value::String(mechanism.as_str().to_string()),
            );
            config.insert(
                SASL_JAAS_CONFIG.to_string(),
                Value::String(jaas_config(mechanism, &username, &password)),
            );
        }
    }

    config.remove(SASL_USERNAME);
    config.remove(SASL_PASSWORD);
    Ok(config)
}

// =============================================================================
// MongoDB
// =============================================================================

/// Connection string read by the MongoDB connectors
pub const MONGODB_URI: &str = "connection.uri";
/// Synthetic connection URL without credentials
pub const MONGODB_URL: &str = "connection.url";
/// Synthetic username
pub const MONGODB_USERNAME: &str = "connection.username";
/// Synthetic password
pub const MONGODB_PASSWORD: &str = "connection.password";

const MONGODB_SCHEME: &str = "mongodb";

/// URL and credential fields replacing the raw connection URI
pub fn mongodb_fields(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let entries = inject(
        entries,
        ConfigurationEntry::new(MONGODB_URL, ConfigType::String)
            .with_display_name("MongoDB connection URL")
            .with_documentation(
                "Connection string without credentials, for example \
                 `mongodb://host1:27017,host2:27017/?replicaSet=rs0`.",
            )
            .with_importance(Importance::High)
            .with_required(true),
        config,
    );
    let entries = inject(
        entries,
        ConfigurationEntry::new(MONGODB_USERNAME, ConfigType::String)
            .with_display_name("MongoDB username")
            .with_importance(Importance::High),
        config,
    );
    inject(
        entries,
        ConfigurationEntry::new(MONGODB_PASSWORD, ConfigType::Password)
            .with_display_name("MongoDB password")
            .with_importance(Importance::High)
            .with_component(ComponentType::Password),
        config,
    )
}

fn percent_encode(value: &str) -> String {
    if is_secret_reference(value) {
        return value.to_string();
    }
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Insert credentials into a MongoDB connection string
///
/// A string that already carries user info is returned unchanged.
pub fn with_credentials(url: &str, username: Option<&str>, password: Option<&str>) -> String {
    let Some(username) = username else {
        return url.to_string();
    };
    let (scheme, rest) = url.split_once("://").unwrap_or((MONGODB_SCHEME, url));
    let authority = rest.split(['/', '?']).next().unwrap_or_default();
    if authority.contains('@') {
        return url.to_string();
    }
    let user_info = match password {
        Some(password) => format!("{}:{}", percent_encode(username), percent_encode(password)),
        None => percent_encode(username),
    };
    format!("{scheme}://{user_info}@{rest}")
}

/// Derive `connection.uri` from URL and credentials
pub fn mongodb_connection_uri(mut config: ConfigMap) -> Result<ConfigMap> {
    let url = scalar(&config, MONGODB_URL)?;
    let username = scalar(&config, MONGODB_USERNAME)?;
    let password = scalar(&config, MONGODB_PASSWORD)?;

    if scalar(&config, MONGODB_URI)?.is_none() {
        if let Some(url) = url {
            let uri = if is_secret_reference(&url) {
                url
            } else {
                with_credentials(&url, username.as_deref(), password.as_deref())
            };
            config.insert(MONGODB_URI.to_string(), Value::String(uri));
        }
    }

    config.remove(MONGODB_URL);
    config.remove(MONGODB_USERNAME);
    config.remove(MONGODB_PASSWORD);
    Ok(config)
}

// =============================================================================
// JDBC
// =============================================================================

/// JDBC connection URL
pub const JDBC_URL: &str = "connection.url";
/// Synthetic SSL mode, folded into the URL
pub const JDBC_SSL_MODE: &str = "connection.ssl.mode";

/// Database drivers with a known SSL mode parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JdbcDriver {
    /// `jdbc:postgresql:`
    Postgres,
    /// `jdbc:mysql:` and `jdbc:mariadb:`
    MySql,
}

impl JdbcDriver {
    /// Recognise the driver from a JDBC URL
    pub fn detect(url: &str) -> Option<Self> {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("jdbc:postgresql:") {
            Some(Self::Postgres)
        } else if lower.starts_with("jdbc:mysql:") || lower.starts_with("jdbc:mariadb:") {
            Some(Self::MySql)
        } else {
            None
        }
    }

    /// Query parameter carrying the SSL mode
    pub fn ssl_param(self) -> &'static str {
        match self {
            Self::Postgres => "sslmode",
            Self::MySql => "sslMode",
        }
    }

    /// Accepted SSL modes
    pub fn ssl_modes(self) -> &'static [&'static str] {
        match self {
            Self::Postgres => &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"],
            Self::MySql => &["DISABLED", "PREFERRED", "REQUIRED", "VERIFY_CA", "VERIFY_IDENTITY"],
        }
    }

    fn default_ssl_mode(self) -> &'static str {
        match self {
            Self::Postgres => "prefer",
            Self::MySql => "PREFERRED",
        }
    }
}

/// SSL mode field for recognised drivers
pub fn jdbc_driver_flags(
    entries: Vec<ConfigurationEntry>,
    config: &ConfigMap,
) -> Vec<ConfigurationEntry> {
    let Some(driver) = lookup(&entries, config, JDBC_URL).and_then(|url| JdbcDriver::detect(&url))
    else {
        return entries;
    };
    inject(
        entries,
        ConfigurationEntry::new(JDBC_SSL_MODE, ConfigType::String)
            .with_display_name("SSL mode")
            .with_documentation("SSL mode used for the database connection.")
            .with_default_value(driver.default_ssl_mode())
            .with_recommended_values(driver.ssl_modes().iter().copied())
            .with_component(ComponentType::Select),
        config,
    )
}

/// Append the SSL mode to a JDBC URL unless it already carries one
///
/// Multi-host URLs (`jdbc:postgresql://h1:5432,h2:5432/db`) are not valid
/// URLs to the parser and get the parameter appended as text.
pub fn with_ssl_mode(url: &str, driver: JdbcDriver, mode: &str) -> String {
    let param = driver.ssl_param();
    let parsed = url
        .get("jdbc:".len()..)
        .and_then(|inner| Url::parse(inner).ok());
    let Some(mut parsed) = parsed else {
        tracing::debug!(%url, "appending SSL mode to unparseable JDBC URL as text");
        return append_query_param(url, param, mode);
    };
    if parsed
        .query_pairs()
        .any(|(k, _)| k.eq_ignore_ascii_case(param))
    {
        return url.to_string();
    }
    parsed.query_pairs_mut().append_pair(param, mode);
    format!("jdbc:{parsed}")
}

fn append_query_param(url: &str, param: &str, mode: &str) -> String {
    let Some((_, query)) = url.split_once('?') else {
        return format!("{url}?{param}={mode}");
    };
    let present = query
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .any(|k| k.eq_ignore_ascii_case(param));
    if present {
        url.to_string()
    } else if query.is_empty() || query.ends_with('&') {
        format!("{url}{param}={mode}")
    } else {
        format!("{url}&{param}={mode}")
    }
}

/// Fold `connection.ssl.mode` into `connection.url`
pub fn jdbc_connection_url(mut config: ConfigMap) -> Result<ConfigMap> {
    let mode = scalar(&config, JDBC_SSL_MODE)?;
    config.remove(JDBC_SSL_MODE);
    let (Some(mode), Some(url)) = (mode, scalar(&config, JDBC_URL)?) else {
        return Ok(config);
    };
    if is_secret_reference(&url) {
        return Ok(config);
    }
    let Some(driver) = JdbcDriver::detect(&url) else {
        return Ok(config);
    };
    if !driver.ssl_modes().contains(&mode.as_str()) {
        return Err(Error::UnsupportedValue {
            key: JDBC_SSL_MODE.to_string(),
            value: mode,
        });
    }
    let url = with_ssl_mode(&url, driver, &mode);
    config.insert(JDBC_URL.to_string(), Value::String(url));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn map(pairs: &[(&str, Value)]) -> ConfigMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[rstest]
    #[case("${secretsManager:prod:password}", true)]
    #[case("${env::PASSWORD}", true)]
    #[case("${secretsManager:prod}", false)]
    #[case("plain", false)]
    #[case("prefix ${a:b:c}", false)]
    fn test_secret_reference_detection(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_secret_reference(value), expected);
    }

    #[rstest]
    #[case("PLAIN", SaslMechanism::Plain)]
    #[case("SCRAM-SHA-256", SaslMechanism::ScramSha256)]
    #[case("SCRAM-SHA-512", SaslMechanism::ScramSha512)]
    fn test_mechanism_parse(#[case] name: &str, #[case] expected: SaslMechanism) {
        assert_eq!(name.parse::<SaslMechanism>().unwrap(), expected);
    }

    #[test]
    fn test_unsupported_mechanism() {
        let err = "GSSAPI".parse::<SaslMechanism>().unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(err, Error::UnsupportedValue { ref value, .. } if value == "GSSAPI"));
    }

    #[test]
    fn test_jaas_config_escapes_plain_values() {
        let jaas = jaas_config(SaslMechanism::Plain, "user", r#"pa"ss\word"#);
        assert_eq!(
            jaas,
            r#"org.apache.kafka.common.security.plain.PlainLoginModule required username="user" password="pa\"ss\\word";"#
        );
    }

    #[test]
    fn test_mirror_jaas_with_secret_reference() {
        let config = map(&[
            (SECURITY_PROTOCOL, json!("SASL_SSL")),
            (SASL_MECHANISM, json!("SCRAM-SHA-512")),
            (SASL_USERNAME, json!("replicator")),
            (SASL_PASSWORD, json!("${secretsManager:mirror:password}")),
        ]);
        let config = mirror_sasl_jaas(config).unwrap();
        assert_eq!(
            config[SASL_JAAS_CONFIG],
            json!(
                "org.apache.kafka.common.security.scram.ScramLoginModule required \
                 username=\"replicator\" password=\"${secretsManager:mirror:password}\";"
            )
        );
        assert!(!config.contains_key(SASL_USERNAME));
        assert!(!config.contains_key(SASL_PASSWORD));
    }

    #[test]
    fn test_mirror_jaas_defaults_to_plain() {
        let config = map(&[
            (SECURITY_PROTOCOL, json!("SASL_PLAINTEXT")),
            (SASL_USERNAME, json!("u")),
            (SASL_PASSWORD, json!("p")),
        ]);
        let config = mirror_sasl_jaas(config).unwrap();
        assert_eq!(config[SASL_MECHANISM], json!("PLAIN"));
        assert!(
            config[SASL_JAAS_CONFIG]
                .as_str()
                .unwrap()
                .starts_with("org.apache.kafka.common.security.plain.PlainLoginModule")
        );
    }

    #[test]
    fn test_mirror_existing_jaas_kept() {
        let config = map(&[
            (SECURITY_PROTOCOL, json!("SASL_SSL")),
            (SASL_JAAS_CONFIG, json!("custom;")),
            (SASL_USERNAME, json!("u")),
            (SASL_PASSWORD, json!("p")),
        ]);
        let config = mirror_sasl_jaas(config).unwrap();
        assert_eq!(config[SASL_JAAS_CONFIG], json!("custom;"));
        assert!(!config.contains_key(SASL_USERNAME));
    }

    #[test]
    fn test_mirror_unsupported_mechanism_errors() {
        let config = map(&[
            (SECURITY_PROTOCOL, json!("SASL_SSL")),
            (SASL_MECHANISM, json!("OAUTHBEARER")),
            (SASL_USERNAME, json!("u")),
            (SASL_PASSWORD, json!("p")),
        ]);
        assert!(matches!(
            mirror_sasl_jaas(config),
            Err(Error::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_non_scalar_credential_rejected() {
        let config = map(&[
            (SECURITY_PROTOCOL, json!("SASL_SSL")),
            (SASL_USERNAME, json!(["u"])),
        ]);
        assert!(matches!(
            mirror_sasl_jaas(config),
            Err(Error::InvalidValueType { .. })
        ));
    }

    #[rstest]
    #[case("mongodb://h:27017/db", Some("u"), Some("p w@"), "mongodb://u:p%20w%40@h:27017/db")]
    #[case("mongodb+srv://cluster.example.com", Some("u"), None, "mongodb+srv://u@cluster.example.com")]
    #[case("h:27017", Some("u"), Some("p"), "mongodb://u:p@h:27017")]
    #[case("mongodb://a:b@h:27017", Some("u"), Some("p"), "mongodb://a:b@h:27017")]
    #[case("mongodb://h:27017", None, Some("p"), "mongodb://h:27017")]
    fn test_with_credentials(
        #[case] url: &str,
        #[case] username: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(with_credentials(url, username, password), expected);
    }

    #[test]
    fn test_mongodb_uri_with_secret_password() {
        let config = map(&[
            (MONGODB_URL, json!("mongodb://h:27017")),
            (MONGODB_USERNAME, json!("app")),
            (MONGODB_PASSWORD, json!("${vault:mongo:password}")),
        ]);
        let config = mongodb_connection_uri(config).unwrap();
        assert_eq!(
            config[MONGODB_URI],
            json!("mongodb://app:${vault:mongo:password}@h:27017")
        );
        assert!(!config.contains_key(MONGODB_URL));
        assert!(!config.contains_key(MONGODB_PASSWORD));
    }

    #[test]
    fn test_mongodb_secret_url_not_rewritten() {
        let config = map(&[
            (MONGODB_URL, json!("${vault:mongo:uri}")),
            (MONGODB_USERNAME, json!("app")),
        ]);
        let config = mongodb_connection_uri(config).unwrap();
        assert_eq!(config[MONGODB_URI], json!("${vault:mongo:uri}"));
    }

    #[test]
    fn test_mongodb_existing_uri_kept() {
        let config = map(&[
            (MONGODB_URI, json!("mongodb://x")),
            (MONGODB_URL, json!("mongodb://y")),
        ]);
        let config = mongodb_connection_uri(config).unwrap();
        assert_eq!(config[MONGODB_URI], json!("mongodb://x"));
        assert!(!config.contains_key(MONGODB_URL));
    }

    #[test]
    fn test_jdbc_ssl_mode_postgres() {
        let config = map(&[
            (JDBC_URL, json!("jdbc:postgresql://db:5432/orders")),
            (JDBC_SSL_MODE, json!("require")),
        ]);
        let config = jdbc_connection_url(config).unwrap();
        assert_eq!(
            config[JDBC_URL],
            json!("jdbc:postgresql://db:5432/orders?sslmode=require")
        );
        assert!(!config.contains_key(JDBC_SSL_MODE));
    }

    #[test]
    fn test_jdbc_ssl_mode_mysql_existing_query() {
        let config = map(&[
            (JDBC_URL, json!("jdbc:mysql://db:3306/orders?useUnicode=true")),
            (JDBC_SSL_MODE, json!("REQUIRED")),
        ]);
        let config = jdbc_connection_url(config).unwrap();
        assert_eq!(
            config[JDBC_URL],
            json!("jdbc:mysql://db:3306/orders?useUnicode=true&sslMode=REQUIRED")
        );
    }

    #[test]
    fn test_jdbc_url_with_ssl_mode_kept() {
        let url = "jdbc:postgresql://db:5432/orders?sslmode=disable";
        let config = map(&[(JDBC_URL, json!(url)), (JDBC_SSL_MODE, json!("require"))]);
        let config = jdbc_connection_url(config).unwrap();
        assert_eq!(config[JDBC_URL], json!(url));
    }

    #[rstest]
    #[case(
        "jdbc:postgresql://h1:5432,h2:5432/orders",
        "require",
        "jdbc:postgresql://h1:5432,h2:5432/orders?sslmode=require"
    )]
    #[case(
        "jdbc:postgresql://h1:5432,h2:5432/orders?targetServerType=primary",
        "require",
        "jdbc:postgresql://h1:5432,h2:5432/orders?targetServerType=primary&sslmode=require"
    )]
    #[case(
        "jdbc:mysql://h1:3306,h2:3306/orders",
        "REQUIRED",
        "jdbc:mysql://h1:3306,h2:3306/orders?sslMode=REQUIRED"
    )]
    #[case(
        "jdbc:mysql://h1:3306,h2:3306/orders?SSLMODE=DISABLED",
        "REQUIRED",
        "jdbc:mysql://h1:3306,h2:3306/orders?SSLMODE=DISABLED"
    )]
    fn test_jdbc_ssl_mode_multi_host(#[case] url: &str, #[case] mode: &str, #[case] expected: &str) {
        let config = map(&[(JDBC_URL, json!(url)), (JDBC_SSL_MODE, json!(mode))]);
        let config = jdbc_connection_url(config).unwrap();
        assert_eq!(config[JDBC_URL], json!(expected));
        assert!(!config.contains_key(JDBC_SSL_MODE));
    }

    #[test]
    fn test_jdbc_invalid_ssl_mode() {
        let config = map(&[
            (JDBC_URL, json!("jdbc:postgresql://db:5432/orders")),
            (JDBC_SSL_MODE, json!("REQUIRED")),
        ]);
        assert!(matches!(
            jdbc_connection_url(config),
            Err(Error::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_jdbc_driver_flags_only_for_known_driver() {
        let mut config = map(&[(JDBC_URL, json!("jdbc:sqlserver://db:1433"))]);
        assert!(jdbc_driver_flags(Vec::new(), &config).is_empty());

        config.insert(JDBC_URL.to_string(), json!("jdbc:postgresql://db/x"));
        let entries = jdbc_driver_flags(Vec::new(), &config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].current_str().as_deref(), Some("prefer"));
        assert_eq!(entries[0].value.recommended_values.len(), 6);
    }
}
