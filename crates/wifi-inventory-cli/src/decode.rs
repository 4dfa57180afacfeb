//! `decode` subcommand: parse a hex IE buffer and print what it advertises.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use wifi_inventory_core::{parse_elements, IeReport, InformationElement};

use crate::OutputFormat;

/// Arguments for the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// IE buffer as hex; whitespace and ':' separators are ignored
    pub hex: String,

    /// Primary channel of the BSS, used to compute bonded channels
    #[arg(short = 'p', long, default_value = "0", allow_negative_numbers = true)]
    pub channel: i32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Element display row for tables
#[derive(Tabled, Serialize)]
struct ElementRow {
    #[tabled(rename = "ID")]
    id: u8,
    #[tabled(rename = "Element")]
    name: &'static str,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Payload")]
    payload: String,
}

impl From<&InformationElement> for ElementRow {
    fn from(ie: &InformationElement) -> Self {
        Self {
            id: ie.id,
            name: element_name(ie.id),
            length: ie.payload.len(),
            payload: hex::encode(&ie.payload),
        }
    }
}

#[derive(Serialize)]
struct DecodeOutput {
    elements: Vec<ElementRow>,
    report: IeReport,
}

/// Common element names, clause 9.4.2.
fn element_name(id: u8) -> &'static str {
    match id {
        0 => "SSID",
        1 => "Supported Rates",
        3 => "DS Parameter Set",
        5 => "TIM",
        7 => "Country",
        11 => "BSS Load",
        42 => "ERP",
        45 => "HT Capabilities",
        48 => "RSN",
        50 => "Extended Supported Rates",
        54 => "Mobility Domain",
        61 => "HT Operation",
        70 => "RM Enabled Capabilities",
        127 => "Extended Capabilities",
        191 => "VHT Capabilities",
        192 => "VHT Operation",
        195 => "Transmit Power Envelope",
        221 => "Vendor Specific",
        255 => "Element ID Extension",
        _ => "Other",
    }
}

/// Parse user-supplied hex, tolerating whitespace and `:` separators.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&compact).context("IE buffer is not valid hex")
}

/// Execute the decode command
pub fn execute(args: DecodeArgs) -> Result<()> {
    let buffer = parse_hex(&args.hex)?;
    let elements = parse_elements(&buffer);
    let report = IeReport::from_elements(&elements, args.channel);
    tracing::debug!(bytes = buffer.len(), elements = elements.len(), "decoded IE buffer");

    let rows: Vec<ElementRow> = elements.iter().map(ElementRow::from).collect();

    match args.format {
        OutputFormat::Json => {
            let output = DecodeOutput {
                elements: rows,
                report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No complete elements in {} bytes.", buffer.len());
                return Ok(());
            }
            println!("{}", Table::new(rows).with(Style::rounded()));
            println!();
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(report: &IeReport) {
    println!("{}", "Decoded Information".bold().cyan());
    println!("{}", "=".repeat(50));

    match report.encryption_summary() {
        Some(summary) => println!("  {} {}", "Security:".dimmed(), summary),
        None => println!("  {} {}", "Security:".dimmed(), "none advertised".yellow()),
    }

    if let Some(load) = &report.bss_load {
        println!(
            "  {} {} stations, {:.1}% utilization, {:.2}% capacity available",
            "BSS Load:".dimmed(),
            load.station_count,
            load.channel_utilization_percent,
            load.available_capacity_percent()
        );
    }

    if let Some(offset) = report.secondary_channel_offset {
        println!("  {} {}", "Secondary Offset:".dimmed(), offset);
    }
    if !report.secondary_channels.is_empty() {
        let channels: Vec<String> = report.secondary_channels.iter().map(i32::to_string).collect();
        println!("  {} {}", "Bonded Channels:".dimmed(), channels.join(", "));
    }

    for ie in &report.vendor_ies {
        println!("  {} {} ({})", "Vendor IE:".dimmed(), ie.vendor_name, ie.oui_hex);
    }
}
