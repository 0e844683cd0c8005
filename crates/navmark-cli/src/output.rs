use crate::cli::OutputFormat;
use crate::commands::Envelope;
use crate::error::CliError;

pub fn render(envelope: &Envelope, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

fn render_table(envelope: &Envelope) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.request_id);
    println!("generated_at: {}", envelope.generated_at);

    if !envelope.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.warnings {
            println!("  - {warning}");
        }
    }

    println!("data:");
    let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
    for line in pretty_data.lines() {
        println!("  {line}");
    }

    Ok(())
}
