//! Presentation series derived from an [`OracleSnapshot`]. Pure functions,
//! nothing here mutates state.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::{dashboard, COUNTRY_COORDS};
use crate::data::counsel::CounselOutcome;
use crate::data::money::millions_label;
use crate::events::TradeEvent;
use crate::services::oracle::OracleSnapshot;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub index: usize,
    pub value_millions: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommodityShare {
    pub name: String,
    pub value_millions: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowArc {
    pub id: String,
    pub origin: MapPoint,
    pub destination: MapPoint,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_volume: u64,
    pub total_volume_label: String,
    pub window_len: usize,
    pub market_openings: usize,
    pub analyzing: bool,
    pub counsel: Option<CounselOutcome>,
    pub timeline: Vec<TimelinePoint>,
    pub commodity_mix: Vec<CommodityShare>,
    pub flow_arcs: Vec<FlowArc>,
    /// Newest first
    pub feed: Vec<TradeEvent>,
}

impl DashboardSnapshot {
    pub fn build(snapshot: &OracleSnapshot) -> Self {
        let events = &snapshot.events;
        Self {
            total_volume: snapshot.total_volume,
            total_volume_label: millions_label(snapshot.total_volume, 1),
            window_len: events.len(),
            market_openings: snapshot
                .counsel
                .as_ref()
                .map_or(0, |c| c.counsel.opportunities.len()),
            analyzing: snapshot.analyzing,
            counsel: snapshot.counsel.clone(),
            timeline: volume_timeline(events, dashboard::TIMELINE_POINTS),
            commodity_mix: commodity_mix(events, dashboard::TOP_COMMODITIES),
            flow_arcs: flow_arcs(events, dashboard::FLOW_ARCS),
            feed: live_feed(events),
        }
    }
}

/// Last `limit` event values in millions, oldest first.
pub fn volume_timeline(events: &[TradeEvent], limit: usize) -> Vec<TimelinePoint> {
    tail(events, limit)
        .iter()
        .enumerate()
        .map(|(index, e)| TimelinePoint {
            index,
            value_millions: e.value_millions(),
        })
        .collect()
}

/// Total value per commodity over the whole window, largest first.
/// Ties keep alphabetical order so the output is stable.
pub fn commodity_mix(events: &[TradeEvent], limit: usize) -> Vec<CommodityShare> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for e in events {
        *totals.entry(e.commodity.as_str()).or_default() += e.value;
    }

    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(name, total)| CommodityShare {
            name: name.to_string(),
            value_millions: total as f64 / 1e6,
        })
        .collect()
}

/// Map arcs for the last `limit` events. Events touching a country without
/// known coordinates are skipped.
pub fn flow_arcs(events: &[TradeEvent], limit: usize) -> Vec<FlowArc> {
    tail(events, limit)
        .iter()
        .filter_map(|e| {
            Some(FlowArc {
                id: e.id.clone(),
                origin: country_position(&e.origin)?,
                destination: country_position(&e.destination)?,
            })
        })
        .collect()
}

pub fn live_feed(events: &[TradeEvent]) -> Vec<TradeEvent> {
    events.iter().rev().cloned().collect()
}

pub fn country_position(country: &str) -> Option<MapPoint> {
    COUNTRY_COORDS
        .iter()
        .find(|(name, _, _)| *name == country)
        .map(|&(_, x, y)| MapPoint { x, y })
}

fn tail(events: &[TradeEvent], limit: usize) -> &[TradeEvent] {
    &events[events.len().saturating_sub(limit)..]
}
