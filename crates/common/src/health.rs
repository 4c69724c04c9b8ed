//! 通用健康检查类型

use serde::{Deserialize, Serialize};

/// 组件健康检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// 组件名称
    pub name: String,
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            name: name.into(),
            healthy: true,
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            healthy: false,
            latency_ms: None,
            error: Some(error.into()),
        }
    }
}

/// 聚合健康状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

impl HealthReport {
    pub fn new() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: Vec::new(),
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if !check.healthy {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl Default for HealthReport {
    fn default() -> Self {
        Self::new()
    }
}
