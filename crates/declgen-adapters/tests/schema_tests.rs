//! Validate rendered declarations against the published extension schemas.
//!
//! These fetch schemas over the network, so they are ignored by default:
//! `cargo test -p declgen-adapters -- --ignored`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use declgen_adapters::TeraRenderer;
use declgen_core::{domain::Declaration, prelude::*};
use regex::Regex;
use serde_json::Value;

static PLACEHOLDER_MTU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mtu: \{+ *[A-Z0-9_]+_MTU *\}+").unwrap());

fn fetch_schema(url: &str) -> Value {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.json::<Value>())
        .unwrap_or_else(|e| panic!("failed to fetch {url}: {e}"))
}

fn render_json<D: Declaration>(generator: &Generator, declaration: D, count: i32) -> Value {
    let mut sink = Vec::<u8>::new();
    generator.generate(declaration, count, &mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();
    let text = PLACEHOLDER_MTU.replace_all(&text, "mtu: 1460");
    serde_yaml::from_str(&text).unwrap()
}

fn assert_valid(schema_url: &str, instance: &Value) {
    let schema = fetch_schema(schema_url);
    let validator = jsonschema::options().build(&schema).unwrap();
    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();
    assert!(errors.is_empty(), "{schema_url}:\n{}", errors.join("\n"));
}

fn generator() -> Generator {
    Generator::new(Box::new(TeraRenderer::builtin().unwrap()))
}

#[test]
#[ignore = "requires network access"]
fn as3_matches_published_schema() {
    let context = As3Context::default();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn application_matches_as3_schema() {
    let context = AppContext {
        vips: vec!["10.0.10.10".into()],
        ..AppContext::default()
    };
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn application_defaults_match_as3_schema() {
    let context = AppContext::default();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn application_with_mixed_vips_and_tenant_matches_as3_schema() {
    let context = AppContext {
        tenant: "FooBarBaz".into(),
        vips: vec![
            "10.0.10.10".into(),
            "10.0.20.0/24".into(),
            "2001:cafe::10".into(),
            "2001:cafe::/64".into(),
        ],
        ..AppContext::default()
    };
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn onboarding_matches_published_schema() {
    let context = DoContext::default();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn onboarding_with_reg_key_matches_published_schema() {
    let mut context = DoContext::default();
    context
        .with_reg_key_licensing("AAAAA-BBBBB-CCCCC-DDDDD-EEEEEEE")
        .unwrap();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 8));
}

#[test]
#[ignore = "requires network access"]
fn onboarding_with_license_pool_matches_published_schema() {
    let mut context = DoContext::default();
    context
        .with_license_pool("pool", "10.10.10.10", "admin", "secret")
        .unwrap();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 1));
}

#[test]
#[ignore = "requires network access"]
fn telemetry_matches_published_schema() {
    let context = TsContext::default();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn failover_matches_published_schema() {
    let context = CfeContext::default();
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

#[test]
#[ignore = "requires network access"]
fn failover_with_tags_and_routes_matches_published_schema() {
    let context = CfeContext {
        scoping_tags: BTreeMap::from([("deployment".into(), "blue".into())]),
        failover_routes: vec![
            FailoverRoute::Static {
                name: "default-route".into(),
                next_hop_addresses: vec!["10.2.0.11".into(), "10.2.0.12".into()],
            },
            FailoverRoute::Tagged {
                scoping_tags: BTreeMap::from([("f5_cloud_failover_label".into(), "x".into())]),
                address_ranges: vec!["192.168.0.0/24".into()],
            },
        ],
        ..CfeContext::default()
    };
    let url = context.schema_url.clone();
    assert_valid(&url, &render_json(&generator(), context, 3));
}

fn full_runtime_init() -> RuntimeInitContext {
    let mut context = RuntimeInitContext {
        application_services: Some(As3Context::default()),
        cloud_failover: Some(CfeContext::default()),
        declarative_onboarding: Some(DoContext::default()),
        telemetry_streaming: Some(TsContext::default()),
        ..RuntimeInitContext::default()
    };
    context.share_with_children();
    context
}

#[test]
#[ignore = "requires network access"]
fn runtime_init_services_match_their_schemas() {
    let context = full_runtime_init();
    let urls = [
        DoContext::default().schema_url,
        As3Context::default().schema_url,
        CfeContext::default().schema_url,
        TsContext::default().schema_url,
    ];
    let generator = generator().with_interface_builder(Box::new(placeholder_interface));
    let document = render_json(&generator, context, 3);

    let services = document["extension_services"]["service_operations"]
        .as_array()
        .unwrap();
    assert_eq!(services.len(), urls.len());
    for (service, url) in services.iter().zip(&urls) {
        assert_valid(url, &service["value"]);
    }
}

#[test]
#[ignore = "requires network access"]
fn cloud_config_matches_published_schema() {
    let context = CloudConfigContext {
        proxy_url: "http://proxy.internal:3128".into(),
        runtime_init: Some(full_runtime_init()),
        ..CloudConfigContext::new()
    };
    let url = context.schema_url.clone();
    let generator = generator().with_interface_builder(Box::new(placeholder_interface));
    assert_valid(&url, &render_json(&generator, context, 3));
}

#[test]
#[ignore = "requires network access"]
fn runtime_init_matches_published_schema() {
    let context = full_runtime_init();
    let url = context.schema_url.clone();
    let generator = generator().with_interface_builder(Box::new(placeholder_interface));
    assert_valid(&url, &render_json(&generator, context, 3));
}
