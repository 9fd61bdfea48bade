// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserializing `CarouselConfig` from page configuration.

#![cfg(feature = "serde")]

use understory_carousel::CarouselConfig;

#[test]
fn missing_fields_take_defaults() {
    let config: CarouselConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn page_spelling_is_accepted() {
    let config: CarouselConfig = serde_json::from_str(
        r##"{
            "containerId": "#custom-carousel",
            "slideId": ".custom-slide",
            "interval": 1000,
            "isPlaying": false,
            "pauseOnHover": true,
            "swipeThreshold": 40
        }"##,
    )
    .unwrap();

    assert_eq!(
        config,
        CarouselConfig::default()
            .with_container("#custom-carousel")
            .with_slides(".custom-slide")
            .with_interval_ms(1000)
            .with_playing(false)
            .with_pause_on_hover(true)
            .with_swipe_threshold(40.0)
    );
}

#[test]
fn round_trips_through_json() {
    let config = CarouselConfig::default().with_swipe(false);
    let text = serde_json::to_string(&config).unwrap();
    assert!(text.contains("\"containerId\""));
    let back: CarouselConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
