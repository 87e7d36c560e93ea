//! Line-by-line prompting for users who do not want to type flags.
//!
//! Each round asks for the voltage system, the mode and the value, then
//! prints the result. A blank voltage system falls back to the settings
//! default; `q` or end of input quits.

use std::io::{self, BufRead, Write};

use ampsize_core::voltage::parse_token;
use ampsize_core::{calculate_with_config, resolve, CalcResult, ModeKind, Settings, VoltageSystem};
use tracing::debug;

use crate::output;

/// One line of input, trimmed. `None` at end of input.
fn prompt_line(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a number, treating anything unparsable as NaN so the engine
/// reports it as invalid input
fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

fn mode_token(kind: ModeKind) -> &'static str {
    match kind {
        ModeKind::Forward => "forward",
        ModeKind::Backward => "backward",
    }
}

fn parse_mode(text: &str, default: ModeKind) -> ModeKind {
    match text.to_ascii_lowercase().as_str() {
        "f" | "fw" | "forward" => ModeKind::Forward,
        "b" | "bw" | "backward" => ModeKind::Backward,
        _ => default,
    }
}

enum Round {
    Quit,
    Done,
}

/// Bail out of the round when input ends mid-prompt
macro_rules! answer {
    ($line:expr) => {
        match $line? {
            Some(line) => line,
            None => return Ok(Round::Quit),
        }
    };
}

fn run_round(input: &mut impl BufRead, out: &mut impl Write, settings: &Settings) -> io::Result<Round> {
    let default_token = settings
        .default_voltage_system
        .map(|s| s.token())
        .unwrap_or("");
    let token = answer!(prompt_line(
        input,
        out,
        &format!("Voltage system [4W_380 / 3W_220 / 1P3W_220 / custom] ({}): ", default_token),
    ));
    if token.eq_ignore_ascii_case("q") {
        return Ok(Round::Quit);
    }

    let system: CalcResult<Option<VoltageSystem>> = if token.is_empty() {
        Ok(settings.default_voltage_system)
    } else if token == "custom" {
        let voltage = answer!(prompt_line(input, out, "Custom voltage (V): "));
        let phase = answer!(prompt_line(input, out, "Three-phase? [y/N]: "));
        let three_phase = matches!(phase.to_ascii_lowercase().as_str(), "y" | "yes");
        let voltage = if voltage.is_empty() { None } else { Some(parse_number(&voltage)) };
        parse_token(&token, voltage, three_phase)
    } else {
        parse_token(&token, None, false)
    };

    let mode_text = answer!(prompt_line(
        input,
        out,
        &format!(
            "Mode [forward = {} / backward = {}] ({}): ",
            ModeKind::Forward.display_name(),
            ModeKind::Backward.display_name(),
            mode_token(settings.default_mode)
        ),
    ));
    let mode_kind = parse_mode(&mode_text, settings.default_mode);

    let value_prompt = match mode_kind {
        ModeKind::Forward => "Power (W): ",
        ModeKind::Backward => "Current (A): ",
    };
    let value = answer!(prompt_line(input, out, value_prompt));
    let mode = mode_kind.with_value(parse_number(&value));
    debug!(token = %token, ?mode, "interactive round");

    writeln!(out)?;
    let outcome = system.and_then(|system| {
        let config = resolve(system.as_ref())?;
        let result = calculate_with_config(&config, mode)?;
        Ok((system, config, result))
    });
    match outcome {
        Ok((system, config, result)) => {
            let label = system.map(|s| s.display_name()).unwrap_or_default();
            output::print_result_human(out, &label, &config, &mode, &result)?;
        }
        Err(e) => output::print_error_human(out, &e)?,
    }
    writeln!(out)?;
    Ok(Round::Done)
}

/// Prompt and calculate until the user quits or input ends
pub fn run(input: &mut impl BufRead, out: &mut impl Write, settings: &Settings) -> io::Result<()> {
    writeln!(out, "Ampsize - Current, Power, Wire and Busbar Sizing")?;
    writeln!(out, "=================================================")?;
    writeln!(out, "Enter q to quit.")?;
    writeln!(out)?;

    while let Round::Done = run_round(input, out, settings)? {}
    Ok(())
}
