#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickDeltas {
    pub minerals: f64,
    pub energy: f64,
}

impl TickDeltas {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The three currencies. None of them ever goes below zero: spends that
/// cannot be covered are refused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wallet {
    pub minerals: f64,
    pub energy: f64,
    pub dark_matter: f64,
    pub tick_deltas: TickDeltas,
}

impl Wallet {
    pub fn begin_tick(&mut self) {
        self.tick_deltas.reset();
    }

    pub fn add_minerals(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.minerals += amount;
        self.tick_deltas.minerals += amount;
    }

    /// Adds energy up to `capacity` and returns the amount actually stored.
    pub fn add_energy(&mut self, amount: f64, capacity: f64) -> f64 {
        let previous = self.energy;
        self.energy = (self.energy + amount.max(0.0)).min(capacity);
        let applied = self.energy - previous;
        self.tick_deltas.energy += applied;
        applied
    }

    pub fn add_dark_matter(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.dark_matter += amount;
    }

    pub fn spend_minerals(&mut self, amount: f64) -> bool {
        if self.minerals < amount {
            return false;
        }
        self.minerals -= amount;
        true
    }

    pub fn spend_dark_matter(&mut self, amount: f64) -> bool {
        if self.dark_matter < amount {
            return false;
        }
        self.dark_matter -= amount;
        true
    }

    /// Clears the per-run currencies. Dark matter is kept.
    pub fn reset_run(&mut self) {
        self.minerals = 0.0;
        self.energy = 0.0;
        self.tick_deltas.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::Wallet;

    #[test]
    fn energy_is_clamped_to_capacity() {
        let mut wallet = Wallet {
            energy: 95.0,
            ..Wallet::default()
        };

        let applied = wallet.add_energy(20.0, 100.0);

        assert_eq!(wallet.energy, 100.0);
        assert_eq!(applied, 5.0);
        assert_eq!(wallet.tick_deltas.energy, 5.0);
    }

    #[test]
    fn overspending_is_refused() {
        let mut wallet = Wallet {
            minerals: 9.0,
            dark_matter: 1.0,
            ..Wallet::default()
        };

        assert!(!wallet.spend_minerals(10.0));
        assert!(!wallet.spend_dark_matter(2.0));
        assert_eq!(wallet.minerals, 9.0);
        assert_eq!(wallet.dark_matter, 1.0);

        assert!(wallet.spend_minerals(9.0));
        assert_eq!(wallet.minerals, 0.0);
    }

    #[test]
    fn reset_run_keeps_dark_matter() {
        let mut wallet = Wallet {
            minerals: 50.0,
            energy: 12.0,
            dark_matter: 3.0,
            ..Wallet::default()
        };

        wallet.reset_run();

        assert_eq!(wallet.minerals, 0.0);
        assert_eq!(wallet.energy, 0.0);
        assert_eq!(wallet.dark_matter, 3.0);
    }
}
