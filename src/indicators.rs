//! Turn signal and high beam lamp states.
//!
//! [`Blinker`] flashes whichever turn signal is commanded. [`DemoSequencer`]
//! runs the self-contained demo cycle used when no vehicle signals are wired:
//! left for ten ticks, right for ten, one dark tick, with the high beam
//! pulsing independently. [`LampDriver`] picks between the two.

use serde::Deserialize;

/// Visibility of the three indicator icons for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorLamps {
    pub left_turn: bool,
    pub right_turn: bool,
    pub high_beam: bool,
}

/// Commanded turn signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnSignal {
    #[default]
    Off,
    Left,
    Right,
    Hazard,
}

/// Flashes the commanded turn signal, one phase per tick.
#[derive(Debug, Clone, Default)]
pub struct Blinker {
    signal: TurnSignal,
    lit: bool,
}

impl Blinker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the commanded signal. The next tick starts in the lit phase.
    pub fn command(&mut self, signal: TurnSignal) {
        if signal != self.signal {
            self.signal = signal;
            self.lit = false;
        }
    }

    /// Advances one blink phase and returns the lamps to show.
    pub fn tick(&mut self, high_beam: bool) -> IndicatorLamps {
        self.lit = !self.lit;
        let lit = self.lit;
        let (left, right) = match self.signal {
            TurnSignal::Off => (false, false),
            TurnSignal::Left => (lit, false),
            TurnSignal::Right => (false, lit),
            TurnSignal::Hazard => (lit, lit),
        };
        IndicatorLamps {
            left_turn: left,
            right_turn: right,
            high_beam,
        }
    }
}

/// Length of one demo cycle in ticks (counter runs 0..=20).
const DEMO_CYCLE: u32 = 21;
const DEMO_LEFT_END: u32 = 10;
const DEMO_RIGHT_END: u32 = 20;
const HIGH_BEAM_PERIOD: u32 = 12;
const HIGH_BEAM_ON_UNTIL: u32 = 6;

/// Demo lamp pattern driven from the indicator timer.
#[derive(Debug, Clone, Default)]
pub struct DemoSequencer {
    counter: u32,
    phase_off: bool,
}

impl DemoSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> IndicatorLamps {
        self.phase_off = !self.phase_off;
        self.counter = (self.counter + 1) % DEMO_CYCLE;

        let lit = !self.phase_off;
        let c = self.counter;
        IndicatorLamps {
            left_turn: lit && c < DEMO_LEFT_END,
            right_turn: lit && (DEMO_LEFT_END..DEMO_RIGHT_END).contains(&c),
            high_beam: c % HIGH_BEAM_PERIOD <= HIGH_BEAM_ON_UNTIL,
        }
    }
}

/// Source of the lamp states fired on each indicator tick.
#[derive(Debug, Clone)]
pub enum LampDriver {
    Demo(DemoSequencer),
    Commanded { blinker: Blinker, high_beam: bool },
}

impl LampDriver {
    /// Demo cycle when `signal` is `None`, otherwise the commanded signal.
    pub fn new(signal: Option<TurnSignal>, high_beam: bool) -> Self {
        match signal {
            None => Self::Demo(DemoSequencer::new()),
            Some(signal) => {
                let mut blinker = Blinker::new();
                blinker.command(signal);
                Self::Commanded { blinker, high_beam }
            }
        }
    }

    /// Switches to (or updates) a commanded signal, keeping the high beam.
    pub fn command(&mut self, signal: TurnSignal, high_beam: bool) {
        match self {
            Self::Commanded { blinker, high_beam: beam } => {
                blinker.command(signal);
                *beam = high_beam;
            }
            Self::Demo(_) => *self = Self::new(Some(signal), high_beam),
        }
    }

    pub fn tick(&mut self) -> IndicatorLamps {
        match self {
            Self::Demo(seq) => seq.tick(),
            Self::Commanded { blinker, high_beam } => blinker.tick(*high_beam),
        }
    }
}
