//! VPN commands: interface status and routing table.

use super::Session;
use crate::output::Output;
use anyhow::{Context, Result};
use connect_ipc::protocol::{
    GetVpnRoutingTableRequest, GetVpnRoutingTableResponse, GetVpnStatusRequest,
    GetVpnStatusResponse,
};
use std::io::{self, Write};
use std::net::Ipv4Addr;
use tracing::debug;

/// Show whether the VPN is up, and its traffic counters.
pub async fn status(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&GetVpnStatusRequest {})
        .await
        .context("could not get VPN status")?;

    out.emit(&response, render_vpn_status)?;
    Ok(())
}

/// Show the VPN routing table.
pub async fn routes(session: &mut Session, out: &mut Output<'_>) -> Result<()> {
    let response = session
        .invoke(&GetVpnRoutingTableRequest {})
        .await
        .context("could not get VPN routing table")?;

    debug!(count = response.routes.len(), "Routing table received");
    out.emit(&response, render_routing_table)?;
    Ok(())
}

/// Dotted-quad form of an address whose most significant byte is the
/// first octet.
pub fn format_ipv4(ip: u32) -> String {
    Ipv4Addr::from(ip).to_string()
}

/// Interface details are only shown while the VPN is enabled.
pub fn render_vpn_status(response: &GetVpnStatusResponse, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Enabled: {}", response.enabled)?;
    if !response.enabled {
        return Ok(());
    }

    writeln!(w, "Local IP: {}", response.local_ip)?;
    writeln!(w, "Device: {}", response.device_name)?;
    if let Some(stats) = &response.stats {
        writeln!(w, "Stats:")?;
        writeln!(
            w,
            "  Sent: {} pkts / {} bytes",
            stats.packets_sent, stats.bytes_sent
        )?;
        writeln!(
            w,
            "  Recv: {} pkts / {} bytes",
            stats.packets_received, stats.bytes_received
        )?;
        writeln!(w, "  Dropped: {} pkts", stats.packets_dropped)?;
    }
    Ok(())
}

pub fn render_routing_table(
    response: &GetVpnRoutingTableResponse,
    w: &mut dyn Write,
) -> io::Result<()> {
    writeln!(w, "Routing Table:")?;
    for route in &response.routes {
        writeln!(
            w,
            "  - IP: {}, Name: {}, Local: {}",
            format_ipv4(route.ip),
            route.name,
            route.is_local
        )?;
    }
    Ok(())
}
