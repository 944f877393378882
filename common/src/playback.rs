//! Scripted "processing" log shown after a campaign is submitted.
//!
//! The playback runs on virtual time: the caller reports how much time has
//! passed with `advance` and gets back whatever became due. In the browser a
//! timer feeds it real milliseconds; tests feed it whatever they like.
//!
//! Line `i` (0-based) is due at `(i + 1) * line_delay`. One delay after the
//! last line a single closing `PlaybackEvent::Download` is emitted; it is
//! never emitted again, however often `advance` is called afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::estimate::EstimateProjection;
use crate::model::campaign::CampaignRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub line_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { line_delay_ms: 800 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Line(String),
    Download,
}

#[derive(Debug, Clone)]
pub struct LogPlayback {
    lines: Vec<String>,
    line_delay: Duration,
    elapsed: Duration,
    revealed: usize,
    download_triggered: bool,
}

impl LogPlayback {
    pub fn new(lines: Vec<String>, line_delay: Duration) -> Self {
        Self {
            lines,
            line_delay,
            elapsed: Duration::ZERO,
            revealed: 0,
            download_triggered: false,
        }
    }

    /// The confirmation script for a submitted campaign.
    pub fn for_campaign(
        record: &CampaignRecord,
        projection: &EstimateProjection,
        config: &PlaybackConfig,
    ) -> Self {
        let categories = record.filters.populated_categories().count();
        let lines = vec![
            format!("> Iniciando campaña \"{}\"...", record.name),
            "> Validando filtros de audiencia...".to_string(),
            format!(
                "> {} filtros aplicados en {} categorías",
                record.filters.selected_count(),
                categories
            ),
            "> Conectando con la base de prospectos...".to_string(),
            "> Calculando segmentos objetivo...".to_string(),
            format!(
                "> Estimación: {} prospectos, {} reuniones",
                projection.potential_leads, projection.estimated_meetings
            ),
            "> Generando archivo de configuración...".to_string(),
            format!("> Campaña {} registrada. Estado: pendiente", record.id),
        ];
        Self::new(lines, Duration::from_millis(config.line_delay_ms))
    }

    /// Moves virtual time forward and returns the events that became due,
    /// in order.
    pub fn advance(&mut self, delta: Duration) -> Vec<PlaybackEvent> {
        self.elapsed += delta;
        let mut events = Vec::new();

        while self.revealed < self.lines.len() && self.elapsed >= self.due_at(self.revealed) {
            events.push(PlaybackEvent::Line(self.lines[self.revealed].clone()));
            self.revealed += 1;
        }

        if !self.download_triggered
            && self.revealed == self.lines.len()
            && self.elapsed >= self.due_at(self.lines.len())
        {
            self.download_triggered = true;
            events.push(PlaybackEvent::Download);
        }

        events
    }

    /// Time left until the next event, `None` once the download fired.
    pub fn next_due(&self) -> Option<Duration> {
        if self.download_triggered {
            return None;
        }
        Some(self.due_at(self.revealed).saturating_sub(self.elapsed))
    }

    pub fn revealed(&self) -> &[String] {
        &self.lines[..self.revealed]
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn download_triggered(&self) -> bool {
        self.download_triggered
    }

    pub fn is_finished(&self) -> bool {
        self.download_triggered
    }

    fn due_at(&self, index: usize) -> Duration {
        self.line_delay * (index as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(n: usize) -> LogPlayback {
        let lines = (1..=n).map(|i| format!("linea {}", i)).collect();
        LogPlayback::new(lines, Duration::from_millis(800))
    }

    #[test]
    fn nothing_is_revealed_before_the_first_delay() {
        let mut playback = script(3);
        assert!(playback.advance(Duration::from_millis(799)).is_empty());
        assert_eq!(playback.next_due(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn lines_are_revealed_one_per_delay() {
        let mut playback = script(3);
        assert_eq!(
            playback.advance(Duration::from_millis(800)),
            vec![PlaybackEvent::Line("linea 1".into())]
        );
        assert_eq!(
            playback.advance(Duration::from_millis(800)),
            vec![PlaybackEvent::Line("linea 2".into())]
        );
        assert_eq!(playback.revealed().len(), 2);
    }

    #[test]
    fn a_long_pause_catches_up_in_order() {
        let mut playback = script(3);
        let events = playback.advance(Duration::from_secs(10));
        assert_eq!(
            events,
            vec![
                PlaybackEvent::Line("linea 1".into()),
                PlaybackEvent::Line("linea 2".into()),
                PlaybackEvent::Line("linea 3".into()),
                PlaybackEvent::Download,
            ]
        );
        assert!(playback.is_finished());
    }

    #[test]
    fn download_fires_exactly_once() {
        let mut playback = script(2);
        let mut downloads = 0;
        for _ in 0..20 {
            downloads += playback
                .advance(Duration::from_millis(400))
                .iter()
                .filter(|e| **e == PlaybackEvent::Download)
                .count();
        }
        assert_eq!(downloads, 1);
        assert_eq!(playback.next_due(), None);
    }

    #[test]
    fn download_waits_one_delay_after_the_last_line() {
        let mut playback = script(1);
        assert_eq!(
            playback.advance(Duration::from_millis(800)),
            vec![PlaybackEvent::Line("linea 1".into())]
        );
        assert!(!playback.download_triggered());
        assert_eq!(playback.advance(Duration::from_millis(800)), vec![PlaybackEvent::Download]);
    }
}
