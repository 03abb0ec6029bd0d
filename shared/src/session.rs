use rand::Rng;
use thiserror::Error;
use validator::ValidationError;

use crate::config::WheelConfig;
use crate::entries::EntryList;
use crate::geometry::{build_segments, WheelSegment};
use crate::shared_wheel_game::{SpinController, SpinRejected, SpinTicket};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("entries cannot change while the wheel is spinning")]
    Spinning,
    #[error("entry rejected: {}", .0.code)]
    Entry(ValidationError),
    #[error("nothing new to import")]
    NothingImported,
    #[error(transparent)]
    Spin(#[from] SpinRejected),
}

impl From<ValidationError> for SessionError {
    fn from(error: ValidationError) -> Self {
        SessionError::Entry(error)
    }
}

/// State owned by the wheel page: the participants plus the spin controller.
///
/// Entry changes are refused mid-spin, and any change to the list drops a
/// revealed winner since its index would point at the wrong name.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSession {
    entries: EntryList,
    spin: SpinController,
}

impl Default for WheelSession {
    fn default() -> Self {
        Self::from_config(&WheelConfig::default())
    }
}

impl WheelSession {
    pub fn from_config(config: &WheelConfig) -> Self {
        Self {
            entries: EntryList::with_seed(&config.seed_names),
            spin: SpinController::new(config.spin),
        }
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn controller(&self) -> &SpinController {
        &self.spin
    }

    pub fn rotation(&self) -> f64 {
        self.spin.rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    pub fn pending(&self) -> Option<SpinTicket> {
        self.spin.pending()
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.spin.winner_index()
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner_index().and_then(|index| self.entries.get(index))
    }

    pub fn segments(&self) -> Vec<WheelSegment> {
        build_segments(self.entries.len())
    }

    pub fn can_spin(&self) -> bool {
        !self.entries.is_empty() && !self.is_spinning()
    }

    pub fn add_single(&mut self, raw: &str) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.entries.add_single(raw)?;
        self.spin.clear_winner();
        Ok(())
    }

    pub fn add_bulk(&mut self, raw: &str) -> Result<usize, SessionError> {
        self.ensure_idle()?;
        match self.entries.add_bulk(raw) {
            0 => Err(SessionError::NothingImported),
            added => {
                self.spin.clear_winner();
                Ok(added)
            }
        }
    }

    pub fn remove(&mut self, value: &str) -> Result<bool, SessionError> {
        self.ensure_idle()?;
        let removed = self.entries.remove(value);
        if removed {
            self.spin.clear_winner();
        }
        Ok(removed)
    }

    pub fn spin<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Result<SpinTicket, SessionError> {
        let ticket = self.spin.start_spin(self.entries.len(), now_ms, rng)?;
        log::info!(
            "Spin {} started across {} entries, landing at {:.1}°",
            ticket.id,
            ticket.entry_count,
            ticket.target_rotation
        );
        Ok(ticket)
    }

    pub fn reveal(&mut self, spin_id: u64) -> Option<&str> {
        let index = self.spin.complete_spin(spin_id)?;
        log::info!("Spin {} revealed winner #{}", spin_id, index);
        self.entries.get(index)
    }

    pub fn advance(&mut self, now_ms: f64) -> Option<&str> {
        let index = self.spin.advance(now_ms)?;
        self.entries.get(index)
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_spinning() {
            return Err(SessionError::Spinning);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpinSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_end_to_end_spin() {
        let mut session = WheelSession::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            session.entries().as_slice(),
            ["Alice", "Brandon", "Charlotte", "Dylan"]
        );

        let ticket = session.spin(0.0, &mut rng).unwrap();
        assert!(session.is_spinning());
        assert_eq!(session.advance(1000.0), None);

        let delay = f64::from(SpinSettings::default().spin_duration_ms);
        let winner = session.advance(delay).map(str::to_string);
        assert!(!session.is_spinning());
        let index = session.winner_index().unwrap();
        assert!(index < 4);
        assert_eq!(index, ticket.winner_index);
        assert_eq!(winner.as_deref(), session.winner());
    }

    #[test]
    fn test_entries_locked_while_spinning() {
        let mut session = WheelSession::default();
        let ticket = session.spin(0.0, &mut StdRng::seed_from_u64(1)).unwrap();
        let during = session.clone();

        assert_eq!(session.add_single("Erin"), Err(SessionError::Spinning));
        assert_eq!(session.add_bulk("Erin, Finn"), Err(SessionError::Spinning));
        assert_eq!(session.remove("Alice"), Err(SessionError::Spinning));
        assert_eq!(session, during);

        assert!(session.reveal(ticket.id).is_some());
        assert!(session.add_single("Erin").is_ok());
    }

    #[test]
    fn test_list_change_clears_winner() {
        let mut session = WheelSession::default();
        let ticket = session.spin(0.0, &mut StdRng::seed_from_u64(7)).unwrap();
        session.reveal(ticket.id).unwrap();
        assert!(session.winner().is_some());

        // Rejected changes keep the winner.
        assert!(session.add_single("alice").is_err());
        assert!(!session.remove("Nobody").unwrap());
        assert!(session.winner().is_some());

        session.remove("Dylan").unwrap();
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_empty_session_cannot_spin() {
        let config = WheelConfig {
            seed_names: Vec::new(),
            ..WheelConfig::default()
        };
        let mut session = WheelSession::from_config(&config);
        assert!(!session.can_spin());
        assert_eq!(
            session.spin(0.0, &mut StdRng::seed_from_u64(3)),
            Err(SessionError::Spin(SpinRejected::NoEntries))
        );
        assert_eq!(session.pending(), None);
        assert_eq!(session.segments().len(), 1);
    }

    #[test]
    fn test_bulk_import_reports_nothing_new() {
        let mut session = WheelSession::default();
        assert_eq!(session.add_bulk("alice,\nDYLAN"), Err(SessionError::NothingImported));
        assert_eq!(session.add_bulk("Taylor\nMorgan\ntaylor\nKai"), Ok(3));
        assert_eq!(session.entries().len(), 7);
    }
}
