//! # ページネーション付きレスポンス
//!
//! 上流 Ledger API の一覧エンドポイントが返すオフセット方式のエンベロープ。

use serde::{Deserialize, Serialize};

/// オフセット方式のページ
///
/// ## JSON 形式
///
/// ```json
/// {
///   "limit": 10,
///   "offset": 0,
///   "total": 1,
///   "data": [...]
/// }
/// ```
///
/// `data.len() <= limit` は上流が保証する前提であり、ここでは検証しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
   /// 要求された最大件数
   pub limit:  u64,
   /// 開始位置
   pub offset: u64,
   /// 上流で利用可能な総件数
   pub total:  u64,
   pub data:   Vec<T>,
}

impl<T> Page<T> {
   /// 後続ページが存在するか
   pub fn has_next(&self) -> bool {
      self.offset.saturating_add(self.data.len() as u64) < self.total
   }
}
