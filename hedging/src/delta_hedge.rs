use pricing::analytic::BlackScholesMerton;
use pricing::common::models::OptionParameters;
use pricing::error::PricingError;

use crate::error::HedgeError;

const DAYS_PER_YEAR: f64 = 365.0;

/// Raw market quote for one rebalancing day. Validation happens when the
/// run constructs `OptionParameters` from it, so a bad quote surfaces as
/// an error of the run, not of schedule assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeSnapshot {
    /// calendar day offset from inception
    pub day: u32,
    pub asset_price: f64,
    pub strike: f64,
    pub time_to_expiration: f64,
    pub rfr: f64,
    pub vola: f64,
    pub dividend_yield: f64,
}

impl HedgeSnapshot {
    pub fn new(
        day: u32,
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            day,
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        }
    }

    fn parameters(&self) -> Result<OptionParameters, PricingError> {
        OptionParameters::new(
            self.asset_price,
            self.strike,
            self.time_to_expiration,
            self.rfr,
            self.vola,
            self.dividend_yield,
        )
    }
}

/// Call value and delta at inception, scaled to the contract size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValuation {
    pub call_price: f64,
    pub delta: f64,
}

/// The day-0 hedge: shares bought and cash borrowed to fund them
/// (negative borrowing means the premium left a surplus).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeSetup {
    pub shares: f64,
    pub borrowing: f64,
}

/// One rebalancing day's ledger entry. The profit is the mark-to-market
/// portfolio value against an initial value of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RebalanceRecord {
    pub day: u32,
    pub profit: f64,
    pub rebalancing_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HedgeRunResult {
    pub initial: InitialValuation,
    pub setup: HedgeSetup,
    pub days: Vec<RebalanceRecord>,
}

/// Position and funding state of a single run. Interest accrues on the
/// prior balance first; the day's rebalancing cost joins the principal
/// afterwards, forming the next opening balance.
struct HedgeLedger {
    shares_held: f64,
    cash_debt: f64,
}

impl HedgeLedger {
    fn open(shares: f64, borrowing: f64) -> Self {
        Self {
            shares_held: shares,
            cash_debt: borrowing,
        }
    }

    fn accrue(&mut self, rfr: f64, dt: f64) {
        self.cash_debt *= (rfr * dt).exp();
    }

    fn rebalance_to(&mut self, target_shares: f64, spot: f64) -> f64 {
        let cost = (target_shares - self.shares_held) * spot;
        self.shares_held = target_shares;
        self.cash_debt += cost;
        cost
    }
}

/// Delta hedging of a short European call over a schedule of market
/// snapshots: buy delta-many shares at inception, funded by the premium
/// plus borrowing, then rebalance to the new delta each day.
/// https://en.wikipedia.org/wiki/Delta_neutral
pub struct DeltaHedgeSimulator {
    /// number of shares underlying one option contract
    contract_size: f64,
}

impl DeltaHedgeSimulator {
    pub fn new(contract_size: f64) -> Self {
        Self { contract_size }
    }

    pub fn run(&self, schedule: &[HedgeSnapshot]) -> Result<HedgeRunResult, HedgeError> {
        let (first, rest) = schedule.split_first().ok_or(HedgeError::EmptySchedule)?;
        let n = self.contract_size;

        let valuation = BlackScholesMerton::evaluate(&first.parameters()?);
        let initial = InitialValuation {
            call_price: valuation.call_price * n,
            delta: valuation.call_delta * n,
        };
        let setup = HedgeSetup {
            shares: initial.delta,
            borrowing: initial.delta * first.asset_price - initial.call_price,
        };

        let mut ledger = HedgeLedger::open(setup.shares, setup.borrowing);
        let mut days = Vec::with_capacity(rest.len());
        let mut prev = first;
        for snapshot in rest {
            if snapshot.day <= prev.day {
                return Err(HedgeError::UnorderedSchedule {
                    prev: prev.day,
                    next: snapshot.day,
                });
            }
            let dt = f64::from(snapshot.day - prev.day) / DAYS_PER_YEAR;
            // the rate quoted on the previous day governs the elapsed interval
            ledger.accrue(prev.rfr, dt);

            let valuation = BlackScholesMerton::evaluate(&snapshot.parameters()?);
            let call_price = valuation.call_price * n;
            let target_shares = valuation.call_delta * n;

            let profit =
                ledger.shares_held * snapshot.asset_price - call_price - ledger.cash_debt;
            let rebalancing_cost = ledger.rebalance_to(target_shares, snapshot.asset_price);
            days.push(RebalanceRecord {
                day: snapshot.day,
                profit,
                rebalancing_cost,
            });
            prev = snapshot;
        }

        Ok(HedgeRunResult {
            initial,
            setup,
            days,
        })
    }
}

/// The canned three-day scenario: a 180-day call struck at 33 on a stock
/// at 35 paying a 2% yield, with the spot moving to 35.50 and then 34.80.
pub fn reference_schedule() -> Vec<HedgeSnapshot> {
    let strike = 33.0;
    let rfr = 0.05;
    let vola = 0.25;
    let dividend_yield = 0.02;
    vec![
        HedgeSnapshot::new(0, 35.0, strike, 180.0 / 365.0, rfr, vola, dividend_yield),
        HedgeSnapshot::new(1, 35.50, strike, 179.0 / 365.0, rfr, vola, dividend_yield),
        HedgeSnapshot::new(2, 34.80, strike, 178.0 / 365.0, rfr, vola, dividend_yield),
    ]
}
