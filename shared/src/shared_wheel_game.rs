use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SpinSettings;
use crate::geometry::slice_angle;

/// Everything the page needs to animate one spin and reveal its result.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    pub id: u64,
    pub winner_index: usize,
    pub entry_count: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub started_at_ms: f64,
    pub reveal_at_ms: f64,
}

impl SpinTicket {
    pub fn duration_ms(&self) -> u32 {
        (self.reveal_at_ms - self.started_at_ms).max(0.0).round() as u32
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning(SpinTicket),
    Revealed { winner_index: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejected {
    #[error("the wheel has no entries")]
    NoEntries,
    #[error("a spin is already in progress")]
    AlreadySpinning,
}

/// Winner-first spin state machine.
///
/// The winner is drawn uniformly before anything moves; the rotation is then
/// derived so the chosen segment stops under the pointer. Decoding the angle
/// afterwards is never needed to know who won.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinController {
    rotation: f64,
    phase: SpinPhase,
    settings: SpinSettings,
    next_spin_id: u64,
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new(SpinSettings::default())
    }
}

impl SpinController {
    pub fn new(settings: SpinSettings) -> Self {
        Self {
            rotation: 0.0,
            phase: SpinPhase::Idle,
            settings: settings.normalized(),
            next_spin_id: 1,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    pub fn pending(&self) -> Option<SpinTicket> {
        match self.phase {
            SpinPhase::Spinning(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn winner_index(&self) -> Option<usize> {
        match self.phase {
            SpinPhase::Revealed { winner_index } => Some(winner_index),
            _ => None,
        }
    }

    pub fn start_spin<R: Rng + ?Sized>(
        &mut self,
        entry_count: usize,
        now_ms: f64,
        rng: &mut R,
    ) -> Result<SpinTicket, SpinRejected> {
        if entry_count == 0 {
            return Err(SpinRejected::NoEntries);
        }
        if self.is_spinning() {
            return Err(SpinRejected::AlreadySpinning);
        }

        let winner_index = rng.gen_range(0..entry_count);
        let slice = slice_angle(entry_count);
        let jitter = if self.settings.landing_jitter > 0.0 {
            rng.gen_range(-0.5..=0.5) * self.settings.landing_jitter * slice
        } else {
            0.0
        };
        let landing = (winner_index as f64 + 0.5) * slice + jitter;
        let align = (self.settings.pointer_angle_deg - landing - self.rotation).rem_euclid(360.0);
        let turns = rng.gen_range(self.settings.min_turns..=self.settings.max_turns);

        let ticket = SpinTicket {
            id: self.next_spin_id,
            winner_index,
            entry_count,
            start_rotation: self.rotation,
            target_rotation: self.rotation + align + f64::from(turns) * 360.0,
            started_at_ms: now_ms,
            reveal_at_ms: now_ms + f64::from(self.settings.spin_duration_ms),
        };

        self.next_spin_id += 1;
        self.rotation = ticket.target_rotation;
        self.phase = SpinPhase::Spinning(ticket);
        Ok(ticket)
    }

    /// Publishes the winner of spin `id`. Stale or unknown ids are ignored.
    pub fn complete_spin(&mut self, id: u64) -> Option<usize> {
        match self.phase {
            SpinPhase::Spinning(ticket) if ticket.id == id => {
                self.phase = SpinPhase::Revealed {
                    winner_index: ticket.winner_index,
                };
                Some(ticket.winner_index)
            }
            _ => None,
        }
    }

    /// Completes the pending spin once `now_ms` reaches its reveal time.
    pub fn advance(&mut self, now_ms: f64) -> Option<usize> {
        match self.phase {
            SpinPhase::Spinning(ticket) if now_ms >= ticket.reveal_at_ms => {
                self.complete_spin(ticket.id)
            }
            _ => None,
        }
    }

    pub fn clear_winner(&mut self) {
        if let SpinPhase::Revealed { .. } = self.phase {
            self.phase = SpinPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::pointer_segment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_spin_with_no_entries_is_rejected() {
        let mut controller = SpinController::default();
        let before = controller.clone();
        assert_eq!(
            controller.start_spin(0, 0.0, &mut rng()),
            Err(SpinRejected::NoEntries)
        );
        assert_eq!(controller, before);
        assert_eq!(controller.pending(), None);
    }

    #[test]
    fn test_spin_while_spinning_is_rejected() {
        let mut controller = SpinController::default();
        let mut rng = rng();
        controller.start_spin(4, 0.0, &mut rng).unwrap();
        let during = controller.clone();
        assert_eq!(
            controller.start_spin(4, 10.0, &mut rng),
            Err(SpinRejected::AlreadySpinning)
        );
        assert_eq!(controller, during);
    }

    #[test]
    fn test_start_spin_sets_target_immediately() {
        let mut controller = SpinController::default();
        let ticket = controller.start_spin(4, 1000.0, &mut rng()).unwrap();
        assert!(controller.is_spinning());
        assert_eq!(controller.winner_index(), None);
        assert_eq!(controller.rotation(), ticket.target_rotation);
        assert_eq!(ticket.reveal_at_ms, 5500.0);
        assert_eq!(ticket.duration_ms(), 4500);

        let travelled = ticket.target_rotation - ticket.start_rotation;
        assert!(travelled >= 5.0 * 360.0);
        assert!(travelled < 10.0 * 360.0);
    }

    #[test]
    fn test_advance_reveals_only_when_due() {
        let mut controller = SpinController::default();
        let ticket = controller.start_spin(3, 0.0, &mut rng()).unwrap();
        assert_eq!(controller.advance(4499.0), None);
        assert!(controller.is_spinning());
        assert_eq!(controller.advance(4500.0), Some(ticket.winner_index));
        assert!(!controller.is_spinning());
        assert_eq!(controller.winner_index(), Some(ticket.winner_index));
        // The timer fires once; later ticks change nothing.
        assert_eq!(controller.advance(9000.0), None);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut controller = SpinController::default();
        let mut rng = rng();
        let first = controller.start_spin(5, 0.0, &mut rng).unwrap();
        controller.complete_spin(first.id).unwrap();
        let second = controller.start_spin(5, 5000.0, &mut rng).unwrap();

        assert_eq!(controller.complete_spin(first.id), None);
        assert!(controller.is_spinning());
        assert_eq!(controller.complete_spin(second.id), Some(second.winner_index));
    }

    #[test]
    fn test_pointer_lands_on_chosen_winner() {
        let mut rng = rng();
        for count in [1, 2, 3, 4, 7, 12, 100] {
            for pointer in [0.0, 90.0, 271.5] {
                let settings = SpinSettings {
                    pointer_angle_deg: pointer,
                    ..SpinSettings::default()
                };
                let mut controller = SpinController::new(settings);
                let mut now = 0.0;
                for _ in 0..200 {
                    let ticket = controller.start_spin(count, now, &mut rng).unwrap();
                    assert_eq!(
                        pointer_segment(ticket.target_rotation, count, pointer),
                        Some(ticket.winner_index),
                        "count {count}, pointer {pointer}"
                    );
                    now = ticket.reveal_at_ms;
                    controller.advance(now).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_rotation_is_strictly_increasing() {
        let mut controller = SpinController::default();
        let mut rng = rng();
        let mut last = controller.rotation();
        for i in 0..50 {
            let ticket = controller.start_spin(6, i as f64 * 5000.0, &mut rng).unwrap();
            assert!(ticket.target_rotation > last);
            last = ticket.target_rotation;
            controller.complete_spin(ticket.id);
        }
    }

    #[test]
    fn test_winner_distribution_is_uniform() {
        const COUNT: usize = 4;
        const SPINS: usize = 40_000;
        let mut controller = SpinController::default();
        let mut rng = rng();
        let mut tally = [0usize; COUNT];
        for _ in 0..SPINS {
            let ticket = controller.start_spin(COUNT, 0.0, &mut rng).unwrap();
            tally[controller.complete_spin(ticket.id).unwrap()] += 1;
        }
        for hits in tally {
            let frequency = hits as f64 / SPINS as f64;
            assert!((frequency - 0.25).abs() < 0.02, "frequency {frequency}");
        }
    }

    #[test]
    fn test_clear_winner() {
        let mut controller = SpinController::default();
        let ticket = controller.start_spin(2, 0.0, &mut rng()).unwrap();
        controller.clear_winner();
        assert!(controller.is_spinning());
        controller.complete_spin(ticket.id);
        controller.clear_winner();
        assert_eq!(controller.phase(), SpinPhase::Idle);
    }
}
