//! Process-wide chart runtime registration.
//!
//! The charting layer needs its scales, elements and plugins registered once
//! before any chart is drawn. [`init_chart_runtime`] does that on first call and
//! hands back the same [`ChartRuntime`] on every later call. Renderers take the
//! returned handle, so a chart cannot be shaped before registration happened.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static RUNTIME: OnceLock<ChartRuntime> = OnceLock::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// A chart building block that must be registered before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartComponent {
    CategoryScale,
    LinearScale,
    PointElement,
    LineElement,
    Title,
    Tooltip,
    Legend,
    Filler,
}

impl ChartComponent {
    /// Everything the price chart draws with.
    pub const ALL: [ChartComponent; 8] = [
        ChartComponent::CategoryScale,
        ChartComponent::LinearScale,
        ChartComponent::PointElement,
        ChartComponent::LineElement,
        ChartComponent::Title,
        ChartComponent::Tooltip,
        ChartComponent::Legend,
        ChartComponent::Filler,
    ];
}

/// Handle proving the chart components are registered.
#[derive(Debug)]
pub struct ChartRuntime {
    components: Vec<ChartComponent>,
}

impl ChartRuntime {
    pub fn components(&self) -> &[ChartComponent] {
        &self.components
    }

    pub fn is_registered(&self, component: ChartComponent) -> bool {
        self.components.contains(&component)
    }
}

/// Registers the chart components once per process. Idempotent.
pub fn init_chart_runtime() -> &'static ChartRuntime {
    RUNTIME.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        tracing::info!(
            components = ChartComponent::ALL.len(),
            "Registering chart runtime"
        );
        ChartRuntime {
            components: ChartComponent::ALL.to_vec(),
        }
    })
}

/// The runtime, if [`init_chart_runtime`] has run.
pub fn chart_runtime() -> Option<&'static ChartRuntime> {
    RUNTIME.get()
}

/// How many times registration actually ran (0 or 1).
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}
