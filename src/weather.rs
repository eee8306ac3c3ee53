use futures::future::join_all;
use gloo_timers::future::TimeoutFuture;

use crate::types::{Condition, PostRecord, WeatherSample};

/// City sequence the simulated service cycles through, by post index.
const CITY_ROTATION: [&str; 5] = ["Paris", "London", "New York", "Tokyo", "Andhra Pradesh"];

const TEMP_BASE: u32 = 20;
const TEMP_SPAN: u32 = 10;

/// Timing knobs for the simulated weather service. The delay grows linearly
/// with the post index so later samples finish last.
#[derive(Clone, Copy, Debug)]
pub struct StubConfig {
    pub base_delay_ms: u32,
    pub step_delay_ms: u32,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 500,
            step_delay_ms: 200,
        }
    }
}

impl StubConfig {
    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_delay_ms + index as u32 * self.step_delay_ms
    }
}

/// Build one sample from a post. Both rolls are uniform in `[0, 1)`; they are
/// parameters so the mapping stays deterministic under test.
pub fn derive_sample(post: &PostRecord, index: usize, temp_roll: f64, cond_roll: f64) -> WeatherSample {
    let city = CITY_ROTATION[index % CITY_ROTATION.len()];
    let temp = TEMP_BASE + (temp_roll * TEMP_SPAN as f64) as u32;
    let condition = match (cond_roll * 3.0) as u32 {
        0 => Condition::Sunny,
        1 => Condition::Cloudy,
        _ => Condition::Rainy,
    };

    WeatherSample {
        city: city.to_string(),
        temperature: format!("{} °C", temp),
        condition,
        note: post.title.clone(),
    }
}

/// Produce one delayed sample per post, all concurrently, and wait for the
/// whole batch. Output order follows post order, not completion order.
pub async fn simulate_all(posts: Vec<PostRecord>, config: &StubConfig) -> Vec<WeatherSample> {
    let futures = posts.into_iter().enumerate().map(|(index, post)| {
        let delay = config.delay_for(index);
        async move {
            TimeoutFuture::new(delay).await;
            derive_sample(&post, index, js_sys::Math::random(), js_sys::Math::random())
        }
    });

    join_all(futures).await
}
