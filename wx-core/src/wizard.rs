//! The three-step wizard: activity, then date, then location.
//!
//! `Wizard` is an immutable value. [`Wizard::apply`] returns a new wizard
//! together with the side effects the caller has to carry out, which for
//! now is only the one-time initialization of the map.

use crate::geo::{CoordinateSource, MapView};
use crate::selection::{GeoPoint, Selection};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Activity = 1,
    Date = 2,
    Location = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Activity, Step::Date, Step::Location];

    pub fn number(self) -> u8 {
        self as u8
    }
}

/// The concern a panel belongs to. Every step is looked up against all
/// three; only the combinations listed in [`PANELS`] exist on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Activity,
    Date,
    Location,
}

impl Concern {
    pub const ALL: [Concern; 3] = [Concern::Activity, Concern::Date, Concern::Location];

    pub fn as_str(self) -> &'static str {
        match self {
            Concern::Activity => "activity",
            Concern::Date => "date",
            Concern::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId {
    pub step: Step,
    pub concern: Concern,
}

impl PanelId {
    pub const fn new(step: Step, concern: Concern) -> Self {
        Self { step, concern }
    }

    /// DOM id of the panel, e.g. `step-2-date`.
    pub fn dom_id(&self) -> String {
        format!("step-{}-{}", self.step.number(), self.concern.as_str())
    }
}

/// Panels present on the page.
pub const PANELS: [PanelId; 3] = [
    PanelId::new(Step::Activity, Concern::Activity),
    PanelId::new(Step::Date, Concern::Date),
    PanelId::new(Step::Location, Concern::Location),
];

/// User actions the wizard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    ChooseActivity(String),
    DateNext { month: String, day: String },
    DateBack,
    LocationBack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: Step,
    selection: Selection,
    map_initialized: bool,
    active: Vec<PanelId>,
}

/// Result of a wizard transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub wizard: Wizard,
    /// The map has to be initialized now. Set at most once per session.
    pub init_coordinate_source: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::start()
    }
}

impl Wizard {
    /// Fresh session on the activity step.
    pub fn start() -> Self {
        Self {
            step: Step::Activity,
            selection: Selection::default(),
            map_initialized: false,
            active: Vec::new(),
        }
        .activate(Step::Activity)
        .wizard
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn map_initialized(&self) -> bool {
        self.map_initialized
    }

    pub fn active_panels(&self) -> &[PanelId] {
        &self.active
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.active.contains(&panel)
    }

    /// Deactivate everything, then activate whichever of `step`'s panels
    /// exist. Entering the location step initializes the map once.
    fn activate(&self, step: Step) -> Transition {
        let active = Concern::ALL
            .iter()
            .map(|&concern| PanelId::new(step, concern))
            .filter(|panel| PANELS.contains(panel))
            .collect();
        let init_coordinate_source = step == Step::Location && !self.map_initialized;
        debug!("Wizard step {:?} -> {:?}", self.step, step);
        Transition {
            wizard: Wizard {
                step,
                selection: self.selection.clone(),
                map_initialized: self.map_initialized || init_coordinate_source,
                active,
            },
            init_coordinate_source,
        }
    }

    fn with_selection(&self, selection: Selection) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    pub fn apply(&self, action: WizardAction) -> Transition {
        match (self.step, action) {
            (Step::Activity, WizardAction::ChooseActivity(activity)) => self
                .with_selection(self.selection.with_activity(activity))
                .activate(Step::Date),
            (Step::Date, WizardAction::DateNext { month, day }) => self
                .with_selection(self.selection.with_date(month, day))
                .activate(Step::Location),
            (Step::Date, WizardAction::DateBack) => self.activate(Step::Activity),
            (Step::Location, WizardAction::LocationBack) => self.activate(Step::Date),
            (step, action) => {
                debug!("Ignoring {:?} on step {:?}", action, step);
                Transition {
                    wizard: self.clone(),
                    init_coordinate_source: false,
                }
            }
        }
    }

    /// Apply `action` and initialize `source` if the transition asks for it.
    pub fn apply_with<S: CoordinateSource>(&self, source: &mut S, action: WizardAction) -> Wizard {
        let transition = self.apply(action);
        if transition.init_coordinate_source {
            source.initialize(&MapView::default());
        }
        transition.wizard
    }

    /// Record a picked location. The step does not change.
    pub fn locate(&self, point: GeoPoint) -> Self {
        self.with_selection(self.selection.with_location(point))
    }
}
