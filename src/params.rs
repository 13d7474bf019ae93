//! Parameter descriptors for the practice trainer.
//!
//! One descriptor per user-adjustable parameter: stable storage key,
//! value type with inclusive bounds, and factory default. This table is
//! the single source of truth — mode-groups ([`crate::groups`]) and the
//! live-value store ([`crate::registry`]) both reference it by [`Param`]
//! tag, never by position in some parallel array.
//!
//! Defaults are applied on first boot (empty storage) and by the
//! "restore defaults" action; thereafter values only change through the
//! settings UI.

use crate::error::RegistryError;

/// Sidetone pitch table in Hz. The `Pitch` parameter stores an index
/// into this table, not a frequency.
pub const SIDETONE_NOTES: [u16; 8] = [523, 587, 659, 698, 784, 880, 988, 1047];

/// Paddle-interpretation algorithm selected by the `KeyerMode` parameter.
///
/// Stored as its discriminant (1-based, matching the persisted format).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i16)]
pub enum KeyerMode {
    /// Curtis mode A: element stops when paddles released.
    CurtisA = 1,
    /// Curtis mode B: enhanced timing, one bonus element on release.
    CurtisB = 2,
    /// Ultimatic: last-pressed paddle wins.
    Ultimatic = 3,
    /// Dual-lever paddle behaves as a single-lever paddle.
    NonSqueeze = 4,
    /// Straight key (for echo training etc.), not really a keyer mode.
    StraightKey = 5,
}

impl KeyerMode {
    /// Decode a stored value, `None` if it is not a keyer mode.
    pub fn from_value(v: i16) -> Option<Self> {
        match v {
            1 => Some(Self::CurtisA),
            2 => Some(Self::CurtisB),
            3 => Some(Self::Ultimatic),
            4 => Some(Self::NonSqueeze),
            5 => Some(Self::StraightKey),
            _ => None,
        }
    }

    /// Display label, identical to the choice label table.
    pub fn label(self) -> &'static str {
        KEYER_MODE_LABELS[(self as usize) - 1]
    }
}

const KEYER_MODE_LABELS: &[&str] =
    &["Curtis A", "Curtis B", "Ultimatic", "Non-Squeeze", "Straight Key"];

const PITCH_LABELS: &[&str] = &[
    "523 Hz", "587 Hz", "659 Hz", "698 Hz", "784 Hz", "880 Hz", "988 Hz", "1047 Hz",
];

const RANDOM_OPTION_LABELS: &[&str] = &[
    "All chars",
    "Alpha",
    "Numerals",
    "Interpunct.",
    "Pro signs",
    "Alpha + num",
    "Num + interpunct.",
    "Interpunct. + pro signs",
    "Alpha + pro signs",
    "All in file",
];

const GEN_DISPLAY_LABELS: &[&str] = &["Display off", "Char by char", "Word by word"];

const WORD_DOUBLER_LABELS: &[&str] = &["Off", "On", "On (less ICS)", "On (true WPM)"];

const ECHO_DISPLAY_LABELS: &[&str] = &["Sound only", "Display only", "Sound & display"];

const TONE_SHIFT_LABELS: &[&str] = &["No shift", "Up half tone", "Down half tone"];

const KOCH_ORDER_LABELS: &[&str] = &["Koch", "LCWO", "CW Academy", "LICW"];

const KOCH_SINGLE_LABELS: &[&str] = &["Up to lesson", "Lesson char only"];

/// Stable identifier for one user-adjustable parameter.
///
/// Discriminants index [`PARAMS`]; persistence uses the descriptor's
/// `nvs_key` string, never the discriminant, so reordering this enum
/// between firmware revisions cannot corrupt stored data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Param {
    KeyerMode,
    Wpm,
    Pitch,
    Volume,
    Latency,
    Polarity,
    CurtisBDotT,
    CurtisBDashT,
    AutoCharSpace,
    RandomOption,
    RandomLength,
    AbbrevLength,
    WordLength,
    MaxSequence,
    CwGenDisplay,
    RandomFile,
    InterCharSpace,
    InterWordSpace,
    StopNextRep,
    WordDoubler,
    EchoDisplay,
    WordPause,
    ToneShift,
    EchoRepeats,
    PromptPause,
    ResponsePause,
    EchoConf,
    SpeedAdapt,
    ShowScrollHelp,
    KochOrder,
    KochLesson,
    KochSingle,
    KochShowMorse,
    KochCwTimer,
    LcwoLesson,
    CwacLesson,
    LicwLesson,
}

impl Param {
    /// Number of registered parameters.
    pub const COUNT: usize = 37;

    /// Every registered parameter, in declaration order.
    pub const ALL: [Param; Param::COUNT] = [
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
        Param::ShowScrollHelp,
        Param::KochOrder,
        Param::KochLesson,
        Param::KochSingle,
        Param::KochShowMorse,
        Param::KochCwTimer,
        Param::LcwoLesson,
        Param::CwacLesson,
        Param::LicwLesson,
    ];

    /// Index into [`PARAMS`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Descriptor for this parameter.
    #[inline]
    pub fn descriptor(self) -> &'static ParamDescriptor {
        &PARAMS[self.index()]
    }

    /// Stable storage key (NVS key name).
    pub fn nvs_key(self) -> &'static str {
        self.descriptor().nvs_key
    }

    /// Factory default. Pure lookup, no side effects.
    pub fn default_value(self) -> i16 {
        self.descriptor().default
    }

    /// Inclusive `(min, max)` bounds. Booleans report `(0, 1)`.
    pub fn valid_range(self) -> (i16, i16) {
        self.descriptor().param_type.bounds()
    }

    /// Whether `value` lies within this parameter's valid range.
    pub fn validate(self, value: i16) -> bool {
        let (min, max) = self.valid_range();
        value >= min && value <= max
    }

    /// Display label for a stored choice value.
    ///
    /// Errors with [`RegistryError::NotEnumerated`] for non-choice
    /// parameters and [`RegistryError::InvalidChoice`] when `value` has
    /// no label.
    pub fn label_for_choice(self, value: i16) -> Result<&'static str, RegistryError> {
        match self.descriptor().param_type {
            ParamType::Choice { first, labels } => {
                if value < first || value >= first + labels.len() as i16 {
                    return Err(RegistryError::InvalidChoice);
                }
                Ok(labels[(value - first) as usize])
            }
            _ => Err(RegistryError::NotEnumerated),
        }
    }
}

/// Value type of a parameter, with inclusive bounds where applicable.
#[derive(Clone, Copy, Debug)]
pub enum ParamType {
    /// Stored as 0/1.
    Bool,
    /// Small unsigned magnitude.
    U8 { min: u8, max: u8 },
    /// Enumerated choice: values `first..first + labels.len()`,
    /// index-aligned with `labels`.
    Choice {
        first: i16,
        labels: &'static [&'static str],
    },
}

impl ParamType {
    /// Inclusive `(min, max)` of the stored scalar.
    pub const fn bounds(&self) -> (i16, i16) {
        match *self {
            ParamType::Bool => (0, 1),
            ParamType::U8 { min, max } => (min as i16, max as i16),
            ParamType::Choice { first, labels } => (first, first + labels.len() as i16 - 1),
        }
    }

    /// True for [`ParamType::Choice`].
    pub const fn is_choice(&self) -> bool {
        matches!(self, ParamType::Choice { .. })
    }
}

/// Descriptor for one parameter: identity, storage key, type, default.
pub struct ParamDescriptor {
    pub param: Param,
    /// Stable storage key. Persistence round-trips every parameter
    /// through this name; it never changes once shipped.
    pub nvs_key: &'static str,
    pub param_type: ParamType,
    /// Factory default. Invariant: lies within `param_type.bounds()`.
    pub default: i16,
}

/// Descriptor table, indexed by `Param as usize`.
///
/// Sentinel conventions preserved from the shipped storage format:
/// 0 means "off" for `Volume` and `AutoCharSpace`, "unlimited" for
/// `AbbrevLength`, `WordLength` and `MaxSequence`; `EchoRepeats` 7
/// means "forever".
pub static PARAMS: &[ParamDescriptor; Param::COUNT] = &PARAM_TABLE;

const PARAM_TABLE: [ParamDescriptor; Param::COUNT] = [
    ParamDescriptor {
        param: Param::KeyerMode,
        nvs_key: "keyermode",
        param_type: ParamType::Choice { first: 1, labels: KEYER_MODE_LABELS },
        default: 2, // Curtis B
    },
    ParamDescriptor {
        param: Param::Wpm,
        nvs_key: "wpm",
        param_type: ParamType::U8 { min: 5, max: 60 },
        default: 15,
    },
    ParamDescriptor {
        param: Param::Pitch,
        nvs_key: "pitch",
        param_type: ParamType::Choice { first: 0, labels: PITCH_LABELS },
        default: 4, // 784 Hz
    },
    ParamDescriptor {
        param: Param::Volume,
        nvs_key: "volume",
        param_type: ParamType::U8 { min: 0, max: 10 },
        default: 5,
    },
    ParamDescriptor {
        param: Param::Latency,
        nvs_key: "latency",
        // 1/8ths of dit length during which paddles are not checked
        param_type: ParamType::U8 { min: 1, max: 8 },
        default: 5,
    },
    ParamDescriptor {
        param: Param::Polarity,
        nvs_key: "didah",
        param_type: ParamType::Bool,
        default: 1, // dit left, dah right
    },
    ParamDescriptor {
        param: Param::CurtisBDotT,
        nvs_key: "curtisbdott",
        param_type: ParamType::U8 { min: 0, max: 100 },
        default: 75,
    },
    ParamDescriptor {
        param: Param::CurtisBDashT,
        nvs_key: "curtisbdasht",
        param_type: ParamType::U8 { min: 0, max: 100 },
        default: 45,
    },
    ParamDescriptor {
        param: Param::AutoCharSpace,
        nvs_key: "acs",
        // 0 = off; only 2-4 are meaningful, the UI steps over 1
        param_type: ParamType::U8 { min: 0, max: 4 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::RandomOption,
        nvs_key: "randomopt",
        param_type: ParamType::Choice { first: 0, labels: RANDOM_OPTION_LABELS },
        default: 0,
    },
    ParamDescriptor {
        param: Param::RandomLength,
        nvs_key: "randomlen",
        param_type: ParamType::U8 { min: 1, max: 5 },
        default: 3,
    },
    ParamDescriptor {
        param: Param::AbbrevLength,
        nvs_key: "abbrevlen",
        param_type: ParamType::U8 { min: 0, max: 6 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::WordLength,
        nvs_key: "wordlen",
        param_type: ParamType::U8 { min: 0, max: 6 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::MaxSequence,
        nvs_key: "maxseq",
        param_type: ParamType::U8 { min: 0, max: 250 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::CwGenDisplay,
        nvs_key: "gendisplay",
        param_type: ParamType::Choice { first: 0, labels: GEN_DISPLAY_LABELS },
        default: 1,
    },
    ParamDescriptor {
        param: Param::RandomFile,
        nvs_key: "randomfile",
        // 0 = play file word by word, 255 = skip a random word count
        param_type: ParamType::U8 { min: 0, max: 255 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::InterCharSpace,
        nvs_key: "intercharspc",
        param_type: ParamType::U8 { min: 3, max: 24 },
        default: 3,
    },
    ParamDescriptor {
        param: Param::InterWordSpace,
        nvs_key: "interwordspc",
        param_type: ParamType::U8 { min: 6, max: 45 },
        default: 7, // norm
    },
    ParamDescriptor {
        param: Param::StopNextRep,
        nvs_key: "autostop",
        param_type: ParamType::Bool,
        default: 1,
    },
    ParamDescriptor {
        param: Param::WordDoubler,
        nvs_key: "worddoubler",
        param_type: ParamType::Choice { first: 0, labels: WORD_DOUBLER_LABELS },
        default: 0,
    },
    ParamDescriptor {
        param: Param::EchoDisplay,
        nvs_key: "echodisplay",
        param_type: ParamType::Choice { first: 1, labels: ECHO_DISPLAY_LABELS },
        default: 3, // sound & display
    },
    ParamDescriptor {
        param: Param::WordPause,
        nvs_key: "wordpause",
        // seconds before the generator sends the next word
        param_type: ParamType::U8 { min: 0, max: 60 },
        default: 0,
    },
    ParamDescriptor {
        param: Param::ToneShift,
        nvs_key: "toneshift",
        param_type: ParamType::Choice { first: 0, labels: TONE_SHIFT_LABELS },
        default: 1, // up half tone
    },
    ParamDescriptor {
        param: Param::EchoRepeats,
        nvs_key: "echorepeats",
        // 7 = repeat forever
        param_type: ParamType::U8 { min: 0, max: 7 },
        default: 3,
    },
    ParamDescriptor {
        param: Param::PromptPause,
        nvs_key: "promptpause",
        // multiples of the inter-word space
        param_type: ParamType::U8 { min: 1, max: 12 },
        default: 2,
    },
    ParamDescriptor {
        param: Param::ResponsePause,
        nvs_key: "resppause",
        // multiples of the inter-word space
        param_type: ParamType::U8 { min: 2, max: 12 },
        default: 5,
    },
    ParamDescriptor {
        param: Param::EchoConf,
        nvs_key: "echoconf",
        param_type: ParamType::Bool,
        default: 1,
    },
    ParamDescriptor {
        param: Param::SpeedAdapt,
        nvs_key: "speedadapt",
        param_type: ParamType::Bool,
        default: 0,
    },
    ParamDescriptor {
        param: Param::ShowScrollHelp,
        nvs_key: "scrollhelp",
        param_type: ParamType::Bool,
        default: 1,
    },
    ParamDescriptor {
        param: Param::KochOrder,
        nvs_key: "kochorder",
        param_type: ParamType::Choice { first: 0, labels: KOCH_ORDER_LABELS },
        default: 0,
    },
    ParamDescriptor {
        param: Param::KochLesson,
        nvs_key: "kochlesson",
        // 51 characters, one lesson each
        param_type: ParamType::U8 { min: 1, max: 51 },
        default: 1,
    },
    ParamDescriptor {
        param: Param::KochSingle,
        nvs_key: "kochsingle",
        param_type: ParamType::Choice { first: 0, labels: KOCH_SINGLE_LABELS },
        default: 0,
    },
    ParamDescriptor {
        param: Param::KochShowMorse,
        nvs_key: "kochshowmorse",
        param_type: ParamType::Bool,
        default: 1,
    },
    ParamDescriptor {
        param: Param::KochCwTimer,
        nvs_key: "kochcwtimer",
        // tens of seconds: 1-9 => 10-90 s
        param_type: ParamType::U8 { min: 1, max: 9 },
        default: 1,
    },
    ParamDescriptor {
        param: Param::LcwoLesson,
        nvs_key: "lcwolesson",
        param_type: ParamType::U8 { min: 1, max: 51 },
        default: 1,
    },
    ParamDescriptor {
        param: Param::CwacLesson,
        nvs_key: "cwaclesson",
        param_type: ParamType::U8 { min: 1, max: 51 },
        default: 1,
    },
    ParamDescriptor {
        param: Param::LicwLesson,
        nvs_key: "licwlesson",
        param_type: ParamType::U8 { min: 1, max: 51 },
        default: 1,
    },
];

/// Defaults as a flat scalar table, readable at const-eval time so the
/// registry's value cells can be born initialized.
pub(crate) const fn default_table() -> [i16; Param::COUNT] {
    let mut t = [0i16; Param::COUNT];
    let mut i = 0;
    while i < Param::COUNT {
        t[i] = PARAM_TABLE[i].default;
        i += 1;
    }
    t
}

/// Look up a descriptor by storage key name.
pub fn find_param(name: &str) -> Option<&'static ParamDescriptor> {
    PARAMS.iter().find(|d| d.nvs_key == name)
}

/// All storage key names, in declaration order (for completion and for
/// persistence-layer completeness checks).
pub fn param_names() -> impl Iterator<Item = &'static str> {
    PARAMS.iter().map(|d| d.nvs_key)
}
