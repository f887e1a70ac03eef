use crate::error::Result;
use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    pub fn is_machine(&self) -> bool {
        !matches!(self, OutputFormat::Table)
    }
}

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
}

impl<T: Serialize> MachineEnvelope<T> {
    pub fn v1(command: &str, data: T, warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            version: "v1".to_string(),
            command: command.to_string(),
            ok: errors.is_empty(),
            data,
            warnings,
            errors,
            meta: MachineMeta {
                generated_at: Utc::now().to_rfc3339(),
            },
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<Option<String>> {
        match format {
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(self)?)),
            OutputFormat::Yaml => Ok(Some(serde_yml::to_string(self)?)),
            OutputFormat::Table => Ok(None),
        }
    }
}

/// Print `data` wrapped in a v1 envelope; a no-op for table output.
pub fn emit_v1<T>(
    command: &str,
    data: T,
    warnings: Vec<String>,
    errors: Vec<String>,
    format: OutputFormat,
) -> Result<()>
where
    T: Serialize,
{
    if let Some(out) = MachineEnvelope::v1(command, data, warnings, errors).render(format)? {
        println!("{}", out);
    }
    Ok(())
}
