//! Tool modal open/close state and the static tool table.
//!
//! DESIGN
//! ======
//! The page has exactly one dialog surface. Which tool owns it is tracked
//! here as a plain state machine (`Closed` / `Open(key)`) so the open, close,
//! and re-open rules are testable without a browser. Components hold a
//! single `RwSignal<ModalState>` from context and never reach for the DOM
//! to decide what is open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Body shown for every tool that has no interactive surface yet.
pub const PLACEHOLDER_BODY: &str = "Placeholder interface — connect to your backend or demo flow here.";

/// Identifier of a tool card and its modal content variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKey {
    ImageVerification,
    TrustScore,
    RiskAnalysis,
    ReportGenerator,
}

impl ToolKey {
    pub const ALL: [ToolKey; 4] = [
        ToolKey::ImageVerification,
        ToolKey::TrustScore,
        ToolKey::RiskAnalysis,
        ToolKey::ReportGenerator,
    ];

    /// Wire identifier carried by the tool card (`data-tool`).
    pub fn id(self) -> &'static str {
        match self {
            Self::ImageVerification => "image-verification",
            Self::TrustScore => "trust-score",
            Self::RiskAnalysis => "risk-analysis",
            Self::ReportGenerator => "report-generator",
        }
    }

    /// Parse a wire identifier. Anything outside the closed set is `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    pub fn descriptor(self) -> &'static ToolDescriptor {
        match self {
            Self::ImageVerification => &TOOLS[0],
            Self::TrustScore => &TOOLS[1],
            Self::RiskAnalysis => &TOOLS[2],
            Self::ReportGenerator => &TOOLS[3],
        }
    }

    pub fn body_kind(self) -> BodyKind {
        match self {
            Self::ImageVerification => BodyKind::ImageImport,
            Self::TrustScore | Self::RiskAnalysis | Self::ReportGenerator => BodyKind::Placeholder,
        }
    }
}

/// Content variant injected into the dialog body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    ImageImport,
    Placeholder,
}

/// Identity of the mounted dialog body. Any change means a fresh subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalBody {
    pub kind: BodyKind,
    pub seq: u64,
}

/// Static title/description metadata for a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub key: ToolKey,
    pub title: &'static str,
    pub description: &'static str,
}

pub static TOOLS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        key: ToolKey::ImageVerification,
        title: "Image Verification Tool",
        description: "Upload images to verify authenticity and integrity. Supports PNG, JPG, WebP.",
    },
    ToolDescriptor {
        key: ToolKey::TrustScore,
        title: "Trust Score Calculator",
        description: "Compute a structured trust score from your inputs (e.g. verification results, history, source).",
    },
    ToolDescriptor {
        key: ToolKey::RiskAnalysis,
        title: "Risk Analysis Module",
        description: "Assess and categorize risk using configurable criteria. Inputs are evaluated against your rules.",
    },
    ToolDescriptor {
        key: ToolKey::ReportGenerator,
        title: "Report Generator",
        description: "Generate structured reports from verification and analysis results.",
    },
];

/// Look up a tool descriptor by its wire identifier.
pub fn lookup(id: &str) -> Option<&'static ToolDescriptor> {
    ToolKey::from_id(id).map(ToolKey::descriptor)
}

/// User actions that dismiss the modal. All of them close the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

/// Open/closed state of the shared tool modal.
///
/// `open_seq` increments on every successful `open`, including re-opening
/// the tool that is already showing. The modal body is keyed on it so each
/// open renders a fresh subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    active: Option<ToolKey>,
    open_seq: u64,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<ToolKey> {
        self.active
    }

    pub fn open_seq(&self) -> u64 {
        self.open_seq
    }

    pub fn descriptor(&self) -> Option<&'static ToolDescriptor> {
        self.active.map(ToolKey::descriptor)
    }

    /// Body to mount, keyed on the open sequence. `None` while closed.
    pub fn body(&self) -> Option<ModalBody> {
        self.active.map(|key| ModalBody { kind: key.body_kind(), seq: self.open_seq })
    }

    /// Open the modal for the tool with wire id `id`.
    ///
    /// Returns `false` and leaves the state untouched for unknown ids.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(descriptor) = lookup(id) else {
            return false;
        };
        self.active = Some(descriptor.key);
        self.open_seq += 1;
        true
    }

    /// Close the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Route a dismissal gesture to `close`.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        match trigger {
            DismissTrigger::CloseButton | DismissTrigger::Backdrop | DismissTrigger::EscapeKey => self.close(),
        }
    }
}
