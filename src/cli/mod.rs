// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v1.1
// Date Modified: 2026-10-17
// Author: Lukas Bower

//! CLI for the gNB registry. Exports the argument parser and main entry.

pub mod args;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use crate::cli::args::{Cli, Command};
use crate::config::RegistryConfig;
use crate::model::GnbRecord;
use crate::registration::{self, RegistrationRequest};

/// Entry point for the CLI. Parses arguments, opens the registry and runs one command.
pub fn run() -> anyhow::Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = RegistryConfig::load_active();
    if let Some(dir) = cli.dir {
        cfg.storage_dir = dir;
    }
    if let Some(key) = cli.key {
        cfg.storage_key = key;
    }
    let mut registry = cfg
        .open_registry()
        .with_context(|| format!("opening registry in {}", cfg.storage_dir.display()))?;
    let json = cli.json;

    match cli.cmd {
        Command::List => {
            if json {
                return print_json(registry.list());
            }
            if registry.is_empty() {
                println!("no gNBs registered");
            }
            for gnb in registry.list() {
                print_gnb_line(gnb);
            }
        }
        Command::Show { gnb_id } => {
            let gnb = registry
                .get(&gnb_id)
                .with_context(|| format!("gNB not found: {gnb_id}"))?;
            if json {
                return print_json(gnb);
            }
            print_gnb_detail(gnb);
        }
        Command::Register { ip, port, response } => {
            let request = RegistrationRequest::from_form(&ip, &port)?;
            let body = read_input(&response)?;
            let outcome = registration::register(&mut registry, &request, &body)?;
            let verb = if outcome.merged { "updated" } else { "added" };
            println!("{verb} gNB at {}", request.connection());
            for gnb in &outcome.evicted {
                println!("evicted conflicting gNB {}", gnb.gnb_id);
            }
        }
        Command::Remove { gnb_id } => {
            registry.remove(&gnb_id)?;
            println!("removed {gnb_id}");
        }
        Command::Nrdc { gnb_id, imsi, indicator } => {
            registry.update_ue_indicator(&gnb_id, &imsi, indicator)?;
            println!("{gnb_id}/{imsi}: nrdcIndicator={indicator}");
        }
        Command::RanUes => {
            let ues = registry.ran_ues();
            if json {
                return print_json(&ues);
            }
            for (n, ue) in ues.iter().enumerate() {
                let dc = if ue.nrdc_indicator { "on" } else { "off" };
                println!("{:>3}  {:<20} DC {:<3}  {} ({})", n + 1, ue.imsi, dc, ue.gnb_name, ue.gnb_id);
            }
        }
        Command::XnUes => {
            let ues = registry.xn_ues();
            if json {
                return print_json(&ues);
            }
            for (n, ue) in ues.iter().enumerate() {
                println!("{:>3}  {:<20} {} ({})", n + 1, ue.imsi, ue.gnb_name, ue.gnb_id);
            }
        }
        Command::Summary => {
            let summary = registry.summary();
            if json {
                return print_json(&summary);
            }
            println!("Total gNBs:    {}", summary.gnb_count);
            println!("Total RAN UEs: {}", summary.ran_ue_count);
            println!("Total XN UEs:  {}", summary.xn_ue_count);
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        return Ok(body);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_gnb_line(gnb: &GnbRecord) {
    let addr = gnb
        .connection
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".into());
    println!(
        "{:<12} {:<16} {:<8} {:<21} RAN {:>3}  XN {:>3}",
        gnb.gnb_id,
        gnb.gnb_name,
        gnb.plmn_id,
        addr,
        gnb.ran_ue_list.len(),
        gnb.xn_ue_list.len()
    );
}

fn print_gnb_detail(gnb: &GnbRecord) {
    println!("gNB ID:   {}", gnb.gnb_id);
    println!("gNB Name: {}", gnb.gnb_name);
    println!("PLMN ID:  {}", gnb.plmn_id);
    let (sst, sd) = gnb
        .snssai
        .as_ref()
        .map(|s| (s.sst.as_str(), s.sd.as_str()))
        .unwrap_or(("N/A", "N/A"));
    println!("SST: {sst}  SD: {sd}");
    if let Some(conn) = &gnb.connection {
        println!("Address:  {conn}");
    }
    println!("RAN UEs:");
    for (n, ue) in gnb.ran_ue_list.iter().enumerate() {
        let dc = if ue.nrdc_indicator { "on" } else { "off" };
        println!("{:>3}  {:<20} DC {}", n + 1, ue.imsi, dc);
    }
    println!("XN UEs:");
    for (n, ue) in gnb.xn_ue_list.iter().enumerate() {
        println!("{:>3}  {}", n + 1, ue.imsi);
    }
}
