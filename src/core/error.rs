// 並列平均計算のカスタムエラー型定義

use thiserror::Error;

/// 平均計算固有のエラー型
#[derive(Error, Debug)]
pub enum ReducerError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("不正なレコード: index={index} - {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("計算エラー: index={index} - {message}")]
    ComputationError { index: usize, message: String },

    #[error("結果の重複: index={index}")]
    DuplicateResult { index: usize },

    #[error("結果の欠落: {received}/{expected}件のみ受信")]
    MissingResults { expected: usize, received: usize },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl ReducerError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 不正レコードエラーの作成
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// 計算エラーの作成
    pub fn computation(index: usize, message: impl Into<String>) -> Self {
        Self::ComputationError {
            index,
            message: message.into(),
        }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// 同じ入力で再実行すれば成功し得るかどうか
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } | Self::InvalidRecord { .. } => false,
            Self::ComputationError { .. } | Self::TaskError { .. } => true,
            Self::DuplicateResult { .. } | Self::MissingResults { .. } => true,
            Self::InternalError { .. } => false,
        }
    }
}

/// Result型のエイリアス
pub type ReducerResult<T> = Result<T, ReducerError>;
