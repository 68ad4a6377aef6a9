//! How much an offer really costs.
//!
//! Fees are applied in a fixed order: the one-off entry fee, the monthly fee
//! on the principal, the yearly interest (negative for schemes that only
//! pay out from new members), the withdrawal fee on what is left, and
//! finally the early withdrawal penalty if the money leaves before the lock
//! period ends.

/// The terms of an offer.
#[derive(Debug, Clone, PartialEq)]
pub struct LossScenario {
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Fixed fee taken up front.
    pub initial_fee: f64,
    /// Monthly fee, percent of the principal.
    pub monthly_fee_percent: f64,
    /// Yearly interest, percent of the principal.
    pub yearly_interest_percent: f64,
    /// Fee on the amount withdrawn, percent.
    pub withdrawal_fee_percent: f64,
    /// Penalty on the principal when withdrawing early, percent.
    pub early_withdrawal_penalty_percent: f64,
    /// Months before withdrawal is free of the penalty.
    pub lock_period_months: u32,
}

impl LossScenario {
    /// An offer with no fees and no interest.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            initial_fee: 0.0,
            monthly_fee_percent: 0.0,
            yearly_interest_percent: 0.0,
            withdrawal_fee_percent: 0.0,
            early_withdrawal_penalty_percent: 0.0,
            lock_period_months: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the up-front fee.
    pub fn with_initial_fee(mut self, fee: f64) -> Self {
        self.initial_fee = fee;
        self
    }

    /// Set the monthly fee.
    pub fn with_monthly_fee(mut self, percent: f64) -> Self {
        self.monthly_fee_percent = percent;
        self
    }

    /// Set the yearly interest.
    pub fn with_yearly_interest(mut self, percent: f64) -> Self {
        self.yearly_interest_percent = percent;
        self
    }

    /// Set the withdrawal fee.
    pub fn with_withdrawal_fee(mut self, percent: f64) -> Self {
        self.withdrawal_fee_percent = percent;
        self
    }

    /// Set the early withdrawal penalty and the lock period it applies to.
    pub fn with_lock(mut self, months: u32, penalty_percent: f64) -> Self {
        self.lock_period_months = months;
        self.early_withdrawal_penalty_percent = penalty_percent;
        self
    }

    /// The offers used in the lessons.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new("Quick loan (300% a year)")
                .with_description("A loan with enormous interest")
                .with_yearly_interest(300.0),
            Self::new("Investment with fees")
                .with_description("An investment with many hidden charges")
                .with_initial_fee(500.0)
                .with_monthly_fee(5.0)
                .with_withdrawal_fee(3.0)
                .with_lock(3, 50.0),
            Self::new("MLM pyramid")
                .with_description("Network marketing with guaranteed losses")
                .with_monthly_fee(10.0)
                .with_yearly_interest(-50.0)
                .with_lock(12, 0.0),
        ]
    }
}

/// Outcome of an offer for one principal and term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossReport {
    /// Amount put in.
    pub principal: f64,
    /// Amount that comes back, never below zero.
    pub total: f64,
    /// Amount lost, never below zero.
    pub loss: f64,
    /// Loss relative to the principal, in percent. Negative when the offer
    /// pays out more than was put in.
    pub loss_percent: f64,
    /// Sum of all fees and penalties.
    pub fees: f64,
}

/// Run `principal` through `scenario` for `months` (at least one).
pub fn calculate(scenario: &LossScenario, principal: f64, months: u32) -> LossReport {
    let principal = principal.max(0.0);
    let months = months.max(1);
    let years = f64::from(months) / 12.0;

    let monthly = principal * scenario.monthly_fee_percent / 100.0 * f64::from(months);
    let interest = principal * scenario.yearly_interest_percent / 100.0 * years;
    let mut fees = scenario.initial_fee + monthly;
    let mut total = principal - scenario.initial_fee - monthly + interest;

    if total > 0.0 {
        let fee = total * scenario.withdrawal_fee_percent / 100.0;
        fees += fee;
        total -= fee;
    }

    if months < scenario.lock_period_months {
        let penalty = principal * scenario.early_withdrawal_penalty_percent / 100.0;
        fees += penalty;
        total -= penalty;
    }

    let loss = principal - total;
    let loss_percent = if principal > 0.0 {
        loss / principal * 100.0
    } else {
        0.0
    };

    LossReport {
        principal,
        total: total.max(0.0),
        loss: loss.max(0.0),
        loss_percent,
        fees,
    }
}
