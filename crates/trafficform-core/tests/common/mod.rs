#![allow(dead_code)]

use std::sync::Mutex;
use trafficform_core::collector::FormSnapshot;
use trafficform_core::kind::TrafficKind;
use trafficform_core::pipeline::{Notice, Notifier};

/// A form with every input filled in within bounds.
pub fn valid_snapshot(kind: TrafficKind) -> FormSnapshot {
    let pairs: &[(&str, &str)] = match kind {
        TrafficKind::Voice => &[("voice_min_bitrate", "10"), ("voice_max_bitrate", "14")],
        TrafficKind::Video => &[
            ("video_min_streams", "2"),
            ("video_max_streams", "4"),
            ("video_min_bitrate", "4"),
            ("video_max_bitrate", "6"),
        ],
        TrafficKind::Gaming => &[
            ("gaming_min_bitrate", "40"),
            ("gaming_max_bitrate", "60"),
            ("gaming_jitter", "5.5"),
            ("gaming_delay", "20"),
            ("gaming_packet_loss_rate", "0.01"),
        ],
        TrafficKind::Iot => &[
            ("iot_min_packet_size", "100"),
            ("iot_max_packet_size", "1000"),
            ("iot_min_interval", "5"),
            ("iot_max_interval", "30"),
        ],
        TrafficKind::Data => &[
            ("data_min_bitrate", "50"),
            ("data_max_bitrate", "500"),
            ("data_min_interval", "2"),
            ("data_max_interval", "10"),
        ],
    };

    pairs
        .iter()
        .fold(FormSnapshot::new(), |snap, (id, value)| snap.with(id, value))
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn taken(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
