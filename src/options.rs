// src/options.rs
use clap::ValueEnum;
use count_deps_engine::options as engine_options;

/// マーカーを探す列（依存構造フォーマットの列名）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MarkerColumn {
    Id,
    Form,
    Lemma,
    Pos,
    /// 第5列（既定）
    #[default]
    Feats,
    Head,
    Deprel,
}

impl From<MarkerColumn> for engine_options::Column {
    fn from(value: MarkerColumn) -> Self {
        match value {
            MarkerColumn::Id => Self::Id,
            MarkerColumn::Form => Self::Form,
            MarkerColumn::Lemma => Self::Lemma,
            MarkerColumn::Pos => Self::Pos,
            MarkerColumn::Feats => Self::Feats,
            MarkerColumn::Head => Self::Head,
            MarkerColumn::Deprel => Self::Deprel,
        }
    }
}
