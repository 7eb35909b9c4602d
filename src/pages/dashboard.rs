//! Inventory dashboard page: load, render, predict, sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only screen. It requests the vehicle collection once at
//! mount, renders it as a table, and issues the two on-demand requests
//! (per-vehicle predict, backend sync trigger) whose results merge into the
//! context state signals.
//!
//! CONCURRENCY
//! ===========
//! Handlers are independent `spawn_local` futures on the browser event loop.
//! Several predict requests may be in flight at once; the last response to
//! settle wins per vehicle. The sync busy flag never blocks predict traffic.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::vehicle_row::VehicleRow;
use crate::net::types::{Prediction, Vehicle};
use crate::state::inventory::InventoryState;
use crate::state::predictions::PredictionsState;
use crate::state::sync::SyncState;

/// The inventory dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let predictions = expect_context::<RwSignal<PredictionsState>>();
    let sync = expect_context::<RwSignal<SyncState>>();

    // One-shot inventory load. A failure degrades silently to an empty
    // table; only the console hears about it.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_vehicles().await {
            Ok(vehicles) => inventory.update(|s| s.replace(vehicles)),
            Err(e) => {
                log::error!("failed to load vehicle inventory: {e}");
                inventory.update(InventoryState::load_failed);
            }
        }
    });

    let on_predict = Callback::new(move |vehicle_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_prediction(vehicle_id).await {
                Ok(prediction) => predictions.update(|s| s.apply(prediction)),
                Err(e) => {
                    log::error!("prediction for vehicle {vehicle_id} failed: {e}");
                    alert(PREDICT_FAILED_ALERT);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = vehicle_id;
    });

    let on_sync = move |_| {
        if sync.get().syncing {
            return;
        }
        sync.update(|s| s.syncing = true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::trigger_sync().await {
                Ok(()) => alert(SYNC_TRIGGERED_ALERT),
                Err(e) => {
                    log::error!("sync trigger failed: {e}");
                    alert(SYNC_FAILED_ALERT);
                }
            }
            // Re-enable the button whichever way the request settled.
            sync.update(|s| s.syncing = false);
        });
    };

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"Audi Inventory Dashboard"</h1>
                    <p class="dashboard-page__subtitle">"Real-time scraping & AI Price Prediction"</p>
                </div>
                <button
                    class="btn dashboard-page__sync"
                    on:click=on_sync
                    disabled=move || sync.get().syncing
                >
                    {move || if sync.get().syncing { "Syncing..." } else { "Sync Now" }}
                </button>
            </header>

            <Show
                when=move || !inventory.get().loading
                fallback=move || {
                    view! {
                        <div class="dashboard-page__loading">
                            <div class="spinner"></div>
                            <p>"Loading inventory..."</p>
                        </div>
                    }
                }
            >
                <div class="dashboard-page__table-wrap">
                    <table class="dashboard-page__table">
                        <thead>
                            <tr>
                                <th>"Vehicle"</th>
                                <th>"Specs"</th>
                                <th>"Price"</th>
                                <th>"AI Prediction"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible_rows(&inventory.get(), &predictions.get())
                                    .into_iter()
                                    .map(|(vehicle, prediction)| {
                                        view! {
                                            <VehicleRow
                                                vehicle=vehicle
                                                prediction=prediction
                                                on_predict=on_predict
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </main>
    }
}

/// Pair each vehicle with its settled prediction, preserving response order.
fn visible_rows(
    inventory: &InventoryState,
    predictions: &PredictionsState,
) -> Vec<(Vehicle, Option<Prediction>)> {
    inventory
        .vehicles
        .iter()
        .map(|vehicle| (vehicle.clone(), predictions.get(vehicle.id).cloned()))
        .collect()
}

#[cfg(any(test, feature = "csr"))]
const PREDICT_FAILED_ALERT: &str =
    "Prediction failed. Ensure the API is running and the model is trained.";
#[cfg(any(test, feature = "csr"))]
const SYNC_TRIGGERED_ALERT: &str = "Sync triggered! Check API logs.";
#[cfg(any(test, feature = "csr"))]
const SYNC_FAILED_ALERT: &str = "Sync failed to trigger.";

#[cfg(feature = "csr")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
