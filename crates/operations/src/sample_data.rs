//! Literal sample network shown by the console.

use crate::records::{
    Alert, KpiCard, LinkKind, MapLink, MapPosition, NetworkSnapshot, OptimizationSummary,
    Station, Train,
};
use crate::status::{AlertSeverity, StationStatus, StatusTier, TrainStatus};

pub static TRAINS: [Train; 4] = [
    Train {
        id: "T001",
        name: "12301 Howrah Rajdhani",
        status: TrainStatus::OnTime,
        delay_min: 0,
        location: "New Delhi",
        progress: 75,
        platform: Some("16"),
        next_station: Some("Kanpur Central"),
        eta: Some("09:55"),
        position: MapPosition::new(25.0, 45.0),
    },
    Train {
        id: "T002",
        name: "12002 Bhopal Shatabdi",
        status: TrainStatus::Delayed,
        delay_min: 15,
        location: "Gwalior Jn",
        progress: 45,
        platform: Some("2"),
        next_station: Some("Jhansi Jn"),
        eta: Some("14:40"),
        position: MapPosition::new(35.0, 60.0),
    },
    Train {
        id: "T003",
        name: "12622 Tamil Nadu Exp",
        status: TrainStatus::OnTime,
        delay_min: 0,
        location: "Chennai Central",
        progress: 90,
        platform: None,
        next_station: None,
        eta: Some("07:10"),
        position: MapPosition::new(55.0, 80.0),
    },
    Train {
        id: "T004",
        name: "12423 Dibrugarh Exp",
        status: TrainStatus::Critical,
        delay_min: 45,
        location: "Guwahati",
        progress: 20,
        platform: None,
        next_station: Some("New Bongaigaon"),
        eta: None,
        position: MapPosition::new(65.0, 35.0),
    },
];

pub static STATIONS: [Station; 5] = [
    Station {
        id: "S001",
        name: "New Delhi",
        position: MapPosition::new(20.0, 30.0),
        trains: 12,
        capacity: 20,
        utilization: 60,
        status: StationStatus::Busy,
    },
    Station {
        id: "S002",
        name: "Mumbai Central",
        position: MapPosition::new(15.0, 70.0),
        trains: 15,
        capacity: 18,
        utilization: 83,
        status: StationStatus::Normal,
    },
    Station {
        id: "S003",
        name: "Chennai Central",
        position: MapPosition::new(60.0, 85.0),
        trains: 8,
        capacity: 16,
        utilization: 50,
        status: StationStatus::Normal,
    },
    Station {
        id: "S004",
        name: "Kolkata Howrah",
        position: MapPosition::new(70.0, 25.0),
        trains: 14,
        capacity: 22,
        utilization: 64,
        status: StationStatus::Maintenance,
    },
    Station {
        id: "S005",
        name: "Bangalore City",
        position: MapPosition::new(50.0, 75.0),
        trains: 10,
        capacity: 14,
        utilization: 71,
        status: StationStatus::Normal,
    },
];

pub static ALERTS: [Alert; 3] = [
    Alert {
        id: "A001",
        severity: AlertSeverity::Critical,
        message: "Track maintenance at KM 245-250, reducing speed to 30 kmph",
        time: "14:32",
    },
    Alert {
        id: "A002",
        severity: AlertSeverity::Warning,
        message: "Platform 3 occupancy conflict between T002 and T007",
        time: "14:28",
    },
    Alert {
        id: "A003",
        severity: AlertSeverity::Info,
        message: "Weather alert: Heavy fog expected after 18:00",
        time: "14:15",
    },
];

const NEW_DELHI: MapPosition = MapPosition::new(20.0, 30.0);
const MUMBAI: MapPosition = MapPosition::new(15.0, 70.0);
const CHENNAI: MapPosition = MapPosition::new(60.0, 85.0);
const HOWRAH: MapPosition = MapPosition::new(70.0, 25.0);
const BANGALORE: MapPosition = MapPosition::new(50.0, 75.0);

pub static LINKS: [MapLink; 6] = [
    MapLink { from: NEW_DELHI, to: HOWRAH, kind: LinkKind::Trunk },
    MapLink { from: MUMBAI, to: CHENNAI, kind: LinkKind::Trunk },
    MapLink { from: NEW_DELHI, to: MUMBAI, kind: LinkKind::Trunk },
    MapLink { from: BANGALORE, to: CHENNAI, kind: LinkKind::Trunk },
    MapLink { from: HOWRAH, to: CHENNAI, kind: LinkKind::Connection },
    MapLink { from: NEW_DELHI, to: BANGALORE, kind: LinkKind::Connection },
];

pub static KPIS: [KpiCard; 4] = [
    KpiCard {
        title: "Active Trains",
        value: "247",
        delta: "+12",
        delta_tier: StatusTier::Success,
        caption: "from yesterday",
    },
    KpiCard {
        title: "On-Time Performance",
        value: "87.3%",
        delta: "+2.1%",
        delta_tier: StatusTier::Success,
        caption: "improvement",
    },
    KpiCard {
        title: "Active Alerts",
        value: "23",
        delta: "3 critical",
        delta_tier: StatusTier::Warning,
        caption: "need attention",
    },
    KpiCard {
        title: "Network Efficiency",
        value: "94.2%",
        delta: "Optimal",
        delta_tier: StatusTier::Success,
        caption: "performance",
    },
];

pub static OPTIMIZATION: OptimizationSummary = OptimizationSummary {
    last_run: "2 minutes ago",
    conflicts_resolved: 12,
    minutes_saved: 45,
};

impl Default for NetworkSnapshot {
    fn default() -> Self {
        Self {
            trains: TRAINS.to_vec(),
            stations: STATIONS.to_vec(),
            alerts: ALERTS.to_vec(),
            links: LINKS.to_vec(),
            kpis: KPIS.to_vec(),
            optimization: OPTIMIZATION,
        }
    }
}
