//! Rolling sampler tests

use crate::test_utils::{FlakyCounters, FrozenCounters, PatternCounters, SteppingCounters};
use hrm_domain::Error;
use hrm_domain::ports::CpuCounterSource;
use hrm_infrastructure::sampler::{RollingCpuSampler, SamplerState};
use std::sync::Arc;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(2);
const HISTORY_LEN: usize = 10;

fn sampler_over<S: CpuCounterSource + 'static>(source: S) -> RollingCpuSampler {
    RollingCpuSampler::new(Arc::new(source), INTERVAL, HISTORY_LEN)
}

async fn wait_for_samples(sampler: &RollingCpuSampler, count: u64) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while sampler.samples_taken() < count {
        assert!(
            Instant::now() < deadline,
            "only {} samples after 10s",
            sampler.samples_taken()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_read_before_start_fails() {
    let sampler = sampler_over(SteppingCounters::new(25, 75));

    let err = sampler.average_load().unwrap_err();
    assert!(matches!(err, Error::NotStarted { .. }));
    assert_eq!(sampler.state(), SamplerState::Idle);
}

#[tokio::test]
async fn test_full_window_mean() {
    let sampler = sampler_over(SteppingCounters::new(25, 75));
    assert!(sampler.start());

    wait_for_samples(&sampler, HISTORY_LEN as u64).await;
    assert_eq!(sampler.average_load().unwrap(), 25.0);

    sampler.stop().await.unwrap();
}

#[tokio::test]
async fn test_mean_of_last_ten_samples() {
    // Any ten consecutive samples hold each load exactly twice
    let sampler = sampler_over(PatternCounters::new(vec![10, 20, 30, 40, 50]));
    sampler.start();

    wait_for_samples(&sampler, 2 * HISTORY_LEN as u64).await;
    assert_eq!(sampler.average_load().unwrap(), 30.0);

    sampler.stop().await.unwrap();
    let window = sampler.recent_samples();
    assert_eq!(window.len(), HISTORY_LEN);
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    assert_eq!(sampler.average_load().unwrap(), mean);
    assert!(window.iter().all(|load| (0.0..=100.0).contains(load)));
}

#[tokio::test]
async fn test_second_start_is_noop() {
    let sampler = sampler_over(SteppingCounters::new(1, 1));
    assert!(sampler.start());
    assert!(!sampler.start());
    assert_eq!(sampler.state(), SamplerState::Measuring);
    assert!(sampler.is_measuring());

    sampler.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_starts_spawn_once() {
    let sampler = Arc::new(sampler_over(SteppingCounters::new(1, 1)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            tokio::spawn(async move { sampler.start() })
        })
        .collect();

    let mut started = 0;
    for handle in handles {
        if handle.await.unwrap() {
            started += 1;
        }
    }
    assert_eq!(started, 1);
    assert_eq!(sampler.state(), SamplerState::Measuring);

    sampler.stop().await.unwrap();
}

#[tokio::test]
async fn test_sample_failures_do_not_stop_the_loop() {
    let sampler = sampler_over(FlakyCounters::new(4, 25, 75));
    sampler.start();

    wait_for_samples(&sampler, HISTORY_LEN as u64).await;
    assert!(sampler.is_measuring());
    assert_eq!(sampler.average_load().unwrap(), 25.0);

    sampler.stop().await.unwrap();
}

#[tokio::test]
async fn test_window_reads_low_until_full() {
    let sampler = sampler_over(FrozenCounters);
    sampler.start();

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(sampler.samples_taken(), 0);
    assert_eq!(sampler.average_load().unwrap(), 0.0);

    sampler.stop().await.unwrap();
}

#[tokio::test]
async fn test_stop_freezes_window() {
    let sampler = sampler_over(SteppingCounters::new(50, 50));
    sampler.start();
    wait_for_samples(&sampler, 3).await;

    sampler.stop().await.unwrap();
    assert_eq!(sampler.state(), SamplerState::Stopped);

    let taken = sampler.samples_taken();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(sampler.samples_taken(), taken);
    assert!(sampler.average_load().is_ok());
    assert!(!sampler.start());
}

#[tokio::test]
async fn test_stop_before_start_keeps_reads_failing() {
    let sampler = sampler_over(SteppingCounters::new(25, 75));

    sampler.stop().await.unwrap();
    assert_eq!(sampler.state(), SamplerState::Idle);
    let err = sampler.average_load().unwrap_err();
    assert!(matches!(err, Error::NotStarted { .. }));

    // Still startable afterwards
    assert!(sampler.start());
    wait_for_samples(&sampler, HISTORY_LEN as u64).await;
    assert_eq!(sampler.average_load().unwrap(), 25.0);
    sampler.stop().await.unwrap();
}

#[test]
fn test_start_without_runtime_is_refused() {
    let sampler = sampler_over(SteppingCounters::new(1, 1));
    assert!(!sampler.start());
    assert_eq!(sampler.state(), SamplerState::Idle);
}

#[tokio::test]
async fn test_independent_samplers() {
    let busy = sampler_over(SteppingCounters::new(90, 10));
    let quiet = sampler_over(SteppingCounters::new(10, 90));
    busy.start();
    quiet.start();

    wait_for_samples(&busy, HISTORY_LEN as u64).await;
    wait_for_samples(&quiet, HISTORY_LEN as u64).await;
    assert_eq!(busy.average_load().unwrap(), 90.0);
    assert_eq!(quiet.average_load().unwrap(), 10.0);

    busy.stop().await.unwrap();
    quiet.stop().await.unwrap();
}
