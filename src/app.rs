use leptos::*;

use crate::api;
use crate::trips::{self, TRIP_COUNT};
use crate::types::{Trip, WeatherSample};
use crate::weather::{self, StubConfig};

#[component]
pub fn App() -> impl IntoView {
    // Shared across both loaders, last write wins. Triggering both at once
    // interleaves the texts, same as the two buttons racing on one page.
    let (header_info, set_header_info) = create_signal(String::from("Wanderboard demo"));
    let (status, set_status) = create_signal(String::from("Ready."));

    let (trip_list, set_trip_list) = create_signal(Vec::<Trip>::new());
    let (trips_loading, set_trips_loading) = create_signal(false);

    let (weather_list, set_weather_list) = create_signal(Vec::<WeatherSample>::new());
    let (weather_loading, set_weather_loading) = create_signal(false);

    let load_trips = move |_| {
        set_trips_loading.set(true);
        set_status.set("Loading trips...".into());

        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => {
                    set_trip_list.set(trips::build_trips(&users));
                    set_header_info.set("Trips loaded with sequential awaits".into());
                    set_status.set("Trips loaded successfully.".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&e);
                    set_status.set("Error loading trips.".into());
                }
            }
            set_trips_loading.set(false);
        });
    };

    let load_weather = move |_| {
        set_weather_loading.set(true);
        set_status.set("Loading weather...".into());

        spawn_local(async move {
            match api::fetch_posts(TRIP_COUNT as u32).await {
                Ok(posts) => {
                    let samples = weather::simulate_all(posts, &StubConfig::default()).await;
                    set_weather_list.set(samples);
                    set_header_info.set("Weather loaded with joined futures".into());
                    set_status.set("Weather loaded successfully.".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&e);
                    set_status.set("Error loading weather.".into());
                }
            }
            set_weather_loading.set(false);
        });
    };

    view! {
        <div class="app">
            <div class="logo">"WANDERBOARD"</div>
            <div class="header-info">{move || header_info.get()}</div>
            <div class="status-text">{move || status.get()}</div>

            <div class="panels">
                <div class="panel">
                    <button
                        class="load-btn"
                        on:click=load_trips
                        disabled=move || trips_loading.get()
                    >
                        {move || if trips_loading.get() { "Loading..." } else { "Load trips" }}
                    </button>
                    <div class="cards">
                        {move || trip_list.get().into_iter().map(|trip| {
                            view! { <TripCard trip=trip /> }
                        }).collect_view()}
                    </div>
                </div>

                <div class="panel">
                    <button
                        class="load-btn"
                        on:click=load_weather
                        disabled=move || weather_loading.get()
                    >
                        {move || if weather_loading.get() { "Loading..." } else { "Load weather" }}
                    </button>
                    <div class="cards">
                        {move || weather_list.get().into_iter().map(|sample| {
                            view! { <WeatherCard sample=sample /> }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TripCard(trip: Trip) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{trip.city}</h3>
            <p>{trip.description}</p>
            <p class="small">"Traveler: " {trip.traveler} " (" {trip.email} ")"</p>
        </div>
    }
}

#[component]
fn WeatherCard(sample: WeatherSample) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{sample.city}</h3>
            <p>"Temperature: " {sample.temperature}</p>
            <p>"Condition: " {sample.condition.as_str()}</p>
            <p class="small">"Note: " {sample.note}</p>
        </div>
    }
}
