// 設定管理の具象実装

use crate::core::ReducerConfig;

/// 1CPUあたりのワーカー数（遅延は待機なのでCPU数より多く確保する）
const WORKERS_PER_CPU: usize = 8;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultReducerConfig {
    max_workers: usize,
    buffer_size: usize,
    enable_progress: bool,
}

impl DefaultReducerConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            max_workers: cpu_count.max(1) * WORKERS_PER_CPU,
            buffer_size: 100,
            enable_progress: true,
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultReducerConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl ReducerConfig for DefaultReducerConfig {
    fn max_workers(&self) -> usize {
        self.max_workers
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
