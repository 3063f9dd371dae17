//! HTTP source

use super::{FieldPatch, KeyTableRule, PatchRule};
use crate::error::Result;
use crate::model::{ComponentType, ConfigType, Importance};
use crate::plugins::HTTP_SOURCE;

fn http_source_table() -> Vec<(&'static str, FieldPatch)> {
    vec![
        (
            "http.request.url",
            FieldPatch::new()
                .display_name("HTTP request URL")
                .documentation("HTTP URL template used to poll the remote endpoint.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "http.request.method",
            FieldPatch::new()
                .display_name("HTTP request method")
                .default_value("GET")
                .options(&[
                    ("GET", "GET"),
                    ("HEAD", "HEAD"),
                    ("POST", "POST"),
                    ("PUT", "PUT"),
                    ("PATCH", "PATCH"),
                ])
                .component(ComponentType::RadioGroup),
        ),
        (
            "http.request.headers",
            FieldPatch::new()
                .display_name("HTTP request headers")
                .documentation(
                    "HTTP headers template, comma-separated `Name: value` pairs, \
                     for example: `Content-Type: application/json, Accept: application/json`.",
                ),
        ),
        (
            "http.request.body",
            FieldPatch::new()
                .display_name("HTTP request body")
                .component(ComponentType::TextArea),
        ),
        (
            "http.timer.interval.millis",
            FieldPatch::new()
                .display_name("Poll interval")
                .documentation("Interval in milliseconds between requests.")
                .default_value("60000"),
        ),
        (
            "http.auth.type",
            FieldPatch::new()
                .display_name("HTTP authentication type")
                .default_value("None")
                .options(&[("None", "None"), ("Basic", "Basic")])
                .component(ComponentType::RadioGroup),
        ),
        (
            "http.auth.user",
            FieldPatch::new().display_name("HTTP authentication user"),
        ),
        (
            "http.auth.password",
            FieldPatch::new()
                .display_name("HTTP authentication password")
                .config_type(ConfigType::Password)
                .component(ComponentType::Password),
        ),
        (
            "kafka.topic",
            FieldPatch::new()
                .display_name("Topic")
                .documentation("Name of the topic to publish records to.")
                .importance(Importance::High)
                .required(true),
        ),
        (
            "http.response.list.pointer",
            FieldPatch::new()
                .display_name("Response list pointer")
                .documentation(
                    "JSON pointer to the array of records in the response body, e.g. `/items`.",
                )
                .default_value("/"),
        ),
        (
            "http.response.record.offset.pointer",
            FieldPatch::new()
                .display_name("Response record offset pointer")
                .documentation(
                    "Comma-separated `key=/pointer` list describing how to build the offset \
                     of each record, e.g. `key=/id`.",
                ),
        ),
        (
            "http.offset.initial",
            FieldPatch::new()
                .display_name("Initial offset")
                .importance(Importance::Low),
        ),
    ]
}

/// HTTP source rules, in order
pub fn rules() -> Result<Vec<Box<dyn PatchRule>>> {
    Ok(vec![Box::new(KeyTableRule::for_plugins(
        "http-source",
        &[HTTP_SOURCE],
        http_source_table(),
    )?)])
}
