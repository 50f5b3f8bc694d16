use std::sync::Arc;

/// Float64型の列を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) name: Option<String>,
}

impl Float64Column {
    /// 新しいFloat64Columnを作成する
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    /// 名前を設定する
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// 名前を取得する
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 内部データへのスライス
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for Float64Column {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_values() {
        let mut col = Float64Column::from(vec![1.5, 2.5]);
        assert_eq!(col.get_name(), None);
        col.set_name("y");
        assert_eq!(col.get_name(), Some("y"));
        assert_eq!(col.len(), 2);
        assert_eq!(col.values(), &[1.5, 2.5]);
        assert!(Float64Column::new(vec![]).is_empty());
    }
}
