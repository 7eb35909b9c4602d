//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::dashboard::DashboardPage;
use crate::state::inventory::InventoryState;
use crate::state::predictions::PredictionsState;
use crate::state::sync::SyncState;

/// Root application component.
///
/// Provides the three independent state contexts (inventory list, prediction
/// map, sync busy flag) and renders the single dashboard page. The pieces of
/// state are deliberately separate signals — they never transition together.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let inventory = RwSignal::new(InventoryState::default());
    let predictions = RwSignal::new(PredictionsState::default());
    let sync = RwSignal::new(SyncState::default());

    provide_context(inventory);
    provide_context(predictions);
    provide_context(sync);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Audi Inventory Dashboard"/>

        <DashboardPage/>
    }
}
