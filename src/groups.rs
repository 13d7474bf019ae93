//! Mode-groups: which parameters each operating mode surfaces.
//!
//! A group is an ordered list of [`Param`] tags; the settings UI renders
//! a group top to bottom in exactly this order. Groups overlap on
//! purpose (`Wpm`, `Pitch`, `Volume` appear almost everywhere) — the
//! descriptor itself lives only in [`crate::params`], so a parameter can
//! sit at a different position in every group without duplicating its
//! range or default.
//!
//! Adding an operating mode means adding one list here; parameter
//! semantics are untouched.

use crate::error::RegistryError;
use crate::params::Param;

/// Operating context whose settings menu is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpMode {
    /// Paddle keyer.
    Keyer,
    /// CW generator (random groups, abbreviations, words, files).
    Generator,
    /// Echo trainer: play, key back, score.
    EchoTrainer,
    /// Koch-method trainer.
    KochTrainer,
    /// General settings menu (superset).
    Settings,
}

impl OpMode {
    /// Every mode, in menu order.
    pub const ALL: [OpMode; 5] = [
        OpMode::Keyer,
        OpMode::Generator,
        OpMode::EchoTrainer,
        OpMode::KochTrainer,
        OpMode::Settings,
    ];

    /// Group name as used by the console and persistence collaborators.
    pub fn name(self) -> &'static str {
        match self {
            OpMode::Keyer => "keyer",
            OpMode::Generator => "generator",
            OpMode::EchoTrainer => "echo",
            OpMode::KochTrainer => "koch",
            OpMode::Settings => "settings",
        }
    }

    /// Parameters this mode surfaces, in presentation order.
    ///
    /// The returned slice is static data: order is stable across calls
    /// and across boots.
    pub fn params(self) -> &'static [Param] {
        match self {
            OpMode::Keyer => KEYER_PARAMS,
            OpMode::Generator => GENERATOR_PARAMS,
            OpMode::EchoTrainer => ECHO_TRAINER_PARAMS,
            OpMode::KochTrainer => KOCH_TRAINER_PARAMS,
            OpMode::Settings => SETTINGS_PARAMS,
        }
    }
}

/// Look up a group by name. [`RegistryError::UnknownGroup`] means the
/// caller baked in a bad name; there is nothing to retry.
pub fn find_group(name: &str) -> Result<&'static [Param], RegistryError> {
    OpMode::ALL
        .iter()
        .find(|m| m.name() == name)
        .map(|m| m.params())
        .ok_or(RegistryError::UnknownGroup)
}

pub static KEYER_PARAMS: &[Param] = &[
    Param::KeyerMode,
    Param::Wpm,
    Param::Pitch,
    Param::Volume,
    Param::Polarity,
    Param::Latency,
    Param::CurtisBDotT,
    Param::CurtisBDashT,
    Param::AutoCharSpace,
];

pub static GENERATOR_PARAMS: &[Param] = &[
    Param::Wpm,
    Param::Pitch,
    Param::Volume,
    Param::StopNextRep,
    Param::MaxSequence,
    Param::WordDoubler,
    Param::RandomOption,
    Param::RandomLength,
    Param::AbbrevLength,
    Param::WordLength,
    Param::CwGenDisplay,
    Param::RandomFile,
    Param::WordPause,
    Param::ToneShift,
    Param::InterCharSpace,
    Param::InterWordSpace,
];

pub static ECHO_TRAINER_PARAMS: &[Param] = &[
    Param::Wpm,
    Param::Pitch,
    Param::Volume,
    Param::ToneShift,
    Param::EchoDisplay,
    Param::EchoRepeats,
    Param::PromptPause,
    Param::ResponsePause,
    Param::EchoConf,
    Param::SpeedAdapt,
];

pub static KOCH_TRAINER_PARAMS: &[Param] = &[
    Param::KochOrder,
    Param::KochSingle,
    Param::KochShowMorse,
    Param::Wpm,
    Param::Pitch,
    Param::Volume,
    Param::KochCwTimer,
    Param::ToneShift,
    Param::EchoDisplay,
    Param::EchoRepeats,
    Param::PromptPause,
    Param::ResponsePause,
    Param::EchoConf,
    Param::SpeedAdapt,
    Param::KochLesson,
];

/// General settings menu. Deliberately not the union of the other
/// groups: `KochSingle`, `KochShowMorse` and the alternate lesson
/// cursors stay inside their own contexts.
pub static SETTINGS_PARAMS: &[Param] = &[
    Param::KeyerMode,
    Param::Wpm,
    Param::Pitch,
    Param::Volume,
    Param::Latency,
    Param::Polarity,
    Param::CurtisBDotT,
    Param::CurtisBDashT,
    Param::AutoCharSpace,
    Param::RandomOption,
    Param::RandomLength,
    Param::AbbrevLength,
    Param::WordLength,
    Param::MaxSequence,
    Param::CwGenDisplay,
    Param::RandomFile,
    Param::InterCharSpace,
    Param::InterWordSpace,
    Param::StopNextRep,
    Param::WordDoubler,
    Param::EchoDisplay,
    Param::WordPause,
    Param::ToneShift,
    Param::EchoRepeats,
    Param::PromptPause,
    Param::ResponsePause,
    Param::EchoConf,
    Param::SpeedAdapt,
    Param::KochOrder,
    Param::KochLesson,
    Param::KochCwTimer,
    Param::ShowScrollHelp,
];
