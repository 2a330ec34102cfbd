//! Implementation of `declgen bigip` and its subcommands.
//!
//! Responsibility: translate flags into context trees, hand them to the core
//! [`Generator`] and deliver the rendered YAML.  Cross-extension settings are
//! shared here, at assembly time, through
//! [`RuntimeInitContext::share_with_children`].

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use declgen_adapters::{TeraRenderer, renderer::helpers::vip_identifier, resolve};
use declgen_core::domain::{InterfaceBuilder, declaration_id, validate_label, validate_tenant};
use declgen_core::prelude::*;

use crate::{
    cli::{
        AppFlags, As3Flags, BigipArgs, BigipCommands, CfeFlags, DoFlags, ExtensionFlags, GlobalArgs,
        TsFlags,
    },
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Written into every header as the generator version.
pub const GENERATOR_VERSION: &str = concat!("declgen ", env!("CARGO_PKG_VERSION"));

/// Execute `declgen bigip`.
#[instrument(skip_all)]
pub fn execute(
    args: BigipArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = Session::new(&global, &config)?;
    let id_url = session.id_url.as_deref();

    match args.command {
        Some(BigipCommands::As3(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = as3_context(&cmd.flags, &cmd.name, id_url);
            context.header = Some(header(&cmd.name, "AS3 declaration", &context.schema_url));
            session.emit(context, Box::new(static_interface), &output)
        }
        Some(BigipCommands::Do(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = do_context(&cmd.flags)?;
            context.header = Some(header(
                &cmd.name,
                "Declarative Onboarding declaration",
                &context.schema_url,
            ));
            session.emit(context, Box::new(static_interface), &output)
        }
        Some(BigipCommands::Cfe(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = cfe_context(&cmd.flags);
            context.header = Some(header(
                &cmd.name,
                "Cloud Failover Extension declaration",
                &context.schema_url,
            ));
            session.emit(context, Box::new(static_interface), &output)
        }
        Some(BigipCommands::Ts(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = ts_context(&cmd.flags);
            context.header = Some(header(
                &cmd.name,
                "Telemetry Streaming declaration",
                &context.schema_url,
            ));
            session.emit(context, Box::new(static_interface), &output)
        }
        Some(BigipCommands::App(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = app_context(&cmd.flags, &cmd.name, id_url)?;
            context.header = Some(header(
                &cmd.name,
                "AS3 application declaration",
                &context.schema_url,
            ));
            session.emit(context, Box::new(static_interface), &output)
        }
        Some(BigipCommands::RuntimeInit(cmd)) => {
            validate_name(&cmd.name)?;
            let mut context = runtime_init_context(&cmd.extensions, &cmd.name, id_url)?;
            context.header = Some(header(
                &cmd.name,
                "runtime-init configuration",
                &context.schema_url,
            ));
            session.emit(context, Box::new(placeholder_interface), &output)
        }
        None => {
            let name = args.name.ok_or_else(|| CliError::InvalidInput {
                message: "a BIG-IP NAME or a subcommand is required".into(),
            })?;
            validate_name(&name)?;
            let mut context = CloudConfigContext::new();
            context.header = Some(header(&name, "cloud-config", &context.schema_url));
            context.proxy_url = args.proxy_url.unwrap_or_default();
            context.runtime_init = Some(runtime_init_context(&args.extensions, &name, id_url)?);
            session.emit(context, Box::new(placeholder_interface), &output)
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Settings shared by every declaration rendered in one invocation.
struct Session {
    renderer: TeraRenderer,
    interfaces: i32,
    id_url: Option<String>,
    output_path: Option<PathBuf>,
}

impl Session {
    fn new(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let templates = resolve(config.templates.local_path.as_deref())?;
        let renderer = TeraRenderer::new(&templates)?;
        debug!(templates = templates.len(), "Template set resolved");

        Ok(Self {
            renderer,
            interfaces: global.interfaces.unwrap_or(config.generator.interfaces),
            id_url: global.url.clone().or_else(|| config.generator.id_url.clone()),
            output_path: global.output.clone(),
        })
    }

    /// Render `declaration` fully, then write it out in one go so a failed
    /// render never leaves a truncated file behind.
    fn emit<D: Declaration>(
        &self,
        declaration: D,
        builder: InterfaceBuilder,
        output: &OutputManager,
    ) -> CliResult<()> {
        let generator =
            Generator::new(Box::new(self.renderer.clone())).with_interface_builder(builder);

        let mut rendered = Vec::new();
        generator.generate(declaration, self.interfaces, &mut rendered)?;
        info!(template = D::TEMPLATE, bytes = rendered.len(), "Declaration generated");

        match &self.output_path {
            Some(path) => {
                fs::write(path, &rendered)
                    .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
                output.success(&format!("Wrote {} to {}", D::TEMPLATE, path.display()))?;
            }
            None => output
                .write_data(&rendered)
                .with_cli_context(|| "Failed to write to stdout")?,
        }
        Ok(())
    }
}

// ── Context assembly ──────────────────────────────────────────────────────────

fn validate_name(name: &str) -> CliResult<()> {
    validate_label(name).map_err(|e| CliError::InvalidName {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn header(name: &str, description: &str, schema_url: &str) -> Header {
    Header::new(name, description, GENERATOR_VERSION, schema_url)
}

pub(crate) fn as3_context(flags: &As3Flags, name: &str, id_url: Option<&str>) -> As3Context {
    let mut context = As3Context {
        package_url: flags.as3_package_url.clone(),
        package_sha: flags.as3_package_checksum.clone(),
        liveness_health_check: flags.as3_livez_health_check,
        liveness_health_check_port: flags.as3_livez_health_check_port,
        label: name.to_string(),
        ..As3Context::default()
    };
    if let Some(url) = id_url {
        context.id = declaration_id(url);
    }
    context
}

/// Pool licensing wins over a registration key; an empty key means no
/// licensing block at all.
pub(crate) fn do_context(flags: &DoFlags) -> CliResult<DoContext> {
    let mut context = DoContext {
        package_url: flags.do_package_url.clone(),
        package_sha: flags.do_package_checksum.clone(),
        ..DoContext::default()
    };
    if let Some(pool) = &flags.license_pool_name {
        context.with_license_pool(
            pool.as_str(),
            flags.bigiq_host.clone().unwrap_or_default(),
            flags.bigiq_username.as_str(),
            flags.bigiq_password.as_str(),
        )?;
    } else if !flags.license_regkey.is_empty() {
        context.with_reg_key_licensing(flags.license_regkey.as_str())?;
    }
    Ok(context)
}

pub(crate) fn cfe_context(flags: &CfeFlags) -> CfeContext {
    let mut context = CfeContext {
        package_url: flags.cfe_package_url.clone(),
        package_sha: flags.cfe_package_checksum.clone(),
        ..CfeContext::default()
    };
    if !flags.cfe_scoping_tags.is_empty() {
        context.scoping_tags = flags.cfe_scoping_tags.iter().cloned().collect();
    }
    context
}

pub(crate) fn ts_context(flags: &TsFlags) -> TsContext {
    TsContext {
        package_url: flags.ts_package_url.clone(),
        package_sha: flags.ts_package_checksum.clone(),
        ..TsContext::default()
    }
}

/// The tenant and addresses are checked here so a typo is reported as bad
/// input rather than as a template failure.
pub(crate) fn app_context(
    flags: &AppFlags,
    name: &str,
    id_url: Option<&str>,
) -> CliResult<AppContext> {
    validate_tenant(&flags.tenant)?;
    for vip in &flags.vips {
        vip_identifier(vip)?;
    }
    let mut context = AppContext {
        tenant: flags.tenant.clone(),
        vips: flags.vips.clone(),
        label: name.to_string(),
        ..AppContext::default()
    };
    if let Some(url) = id_url {
        context.id = declaration_id(url);
    }
    Ok(context)
}

/// Assemble a runtime-init tree with one child per enabled extension.
pub(crate) fn runtime_init_context(
    flags: &ExtensionFlags,
    name: &str,
    id_url: Option<&str>,
) -> CliResult<RuntimeInitContext> {
    let enabled = &flags.runtime_init;
    let mut context = RuntimeInitContext {
        package_url: enabled.runtime_init_package_url.clone(),
        package_sha: enabled.runtime_init_package_checksum.clone(),
        ..RuntimeInitContext::default()
    };

    if enabled.as3_enable {
        context.application_services = Some(as3_context(&flags.as3, name, id_url));
    }
    if enabled.do_enable {
        context.declarative_onboarding = Some(do_context(&flags.onboarding)?);
    }
    if enabled.cfe_enable {
        context.cloud_failover = Some(cfe_context(&flags.cfe));
    }
    if enabled.ts_enable {
        context.telemetry_streaming = Some(ts_context(&flags.ts));
    }
    if enabled.app_enable {
        context.application = Some(app_context(&flags.app, name, id_url)?);
    }

    context.share_with_children();
    debug!(
        as3 = enabled.as3_enable,
        onboarding = enabled.do_enable,
        cfe = enabled.cfe_enable,
        ts = enabled.ts_enable,
        app = enabled.app_enable,
        "runtime-init tree assembled"
    );
    Ok(context)
}
