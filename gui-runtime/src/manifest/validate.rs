//! Manifest 校验
//!
//! 只产生警告，不阻止加载。

use std::collections::HashSet;
use std::fmt;

use super::{ComponentEntry, ComponentId, MANIFEST_VERSION, Manifest, PageId};

/// Manifest 校验警告
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestWarning {
    /// 版本号高于本运行时支持的版本
    UnsupportedVersion { version: u32 },
    /// 网格尺寸不是 16 或 32
    UnusualGridSize { size: u32 },
    /// 没有声明任何皮肤包
    NoSkinPacks,
    /// 没有任何页面
    NoPages,
    /// 页面 id 重复
    DuplicatePage { page: PageId },
    /// 同一页面内组件 id 重复
    DuplicateComponent {
        page: PageId,
        component: ComponentId,
    },
    /// `open_page` 指向不存在的页面
    DanglingOpenPage {
        page: PageId,
        component: ComponentId,
        target: PageId,
    },
    /// `start_page` 指向不存在的页面
    DanglingStartPage { target: PageId },
    /// 无法识别的组件类型
    UnknownComponentType { page: PageId, type_name: String },
}

impl fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestWarning::UnsupportedVersion { version } => {
                write!(
                    f,
                    "manifest 版本 {} 高于支持的版本 {}",
                    version, MANIFEST_VERSION
                )
            }
            ManifestWarning::UnusualGridSize { size } => {
                write!(f, "网格尺寸 {} 不是 16 或 32", size)
            }
            ManifestWarning::NoSkinPacks => write!(f, "未声明任何皮肤包"),
            ManifestWarning::NoPages => write!(f, "manifest 不包含任何页面"),
            ManifestWarning::DuplicatePage { page } => write!(f, "页面 id '{}' 重复", page),
            ManifestWarning::DuplicateComponent { page, component } => {
                write!(f, "页面 '{}' 中组件 id '{}' 重复", page, component)
            }
            ManifestWarning::DanglingOpenPage {
                page,
                component,
                target,
            } => {
                write!(
                    f,
                    "页面 '{}' 的组件 '{}' 跳转到不存在的页面 '{}'",
                    page, component, target
                )
            }
            ManifestWarning::DanglingStartPage { target } => {
                write!(f, "start_page 指向不存在的页面 '{}'", target)
            }
            ManifestWarning::UnknownComponentType { page, type_name } => {
                write!(f, "页面 '{}' 包含未知组件类型 '{}'", page, type_name)
            }
        }
    }
}

impl Manifest {
    /// 验证 Manifest 内容
    ///
    /// 返回所有警告，顺序与 manifest 中的声明顺序一致。
    pub fn validate(&self) -> Vec<ManifestWarning> {
        let mut warnings = Vec::new();

        if let Some(version) = self.version {
            if version > MANIFEST_VERSION {
                warnings.push(ManifestWarning::UnsupportedVersion { version });
            }
        }

        if self.size != 16 && self.size != 32 {
            warnings.push(ManifestWarning::UnusualGridSize { size: self.size });
        }

        if self.skin_packs.is_empty() {
            warnings.push(ManifestWarning::NoSkinPacks);
        }

        if self.pages.is_empty() {
            warnings.push(ManifestWarning::NoPages);
        }

        if let Some(target) = &self.start_page {
            if self.find_page(target).is_none() {
                warnings.push(ManifestWarning::DanglingStartPage {
                    target: target.clone(),
                });
            }
        }

        let mut seen_pages = HashSet::new();
        for page in &self.pages {
            if !seen_pages.insert(&page.id) {
                warnings.push(ManifestWarning::DuplicatePage {
                    page: page.id.clone(),
                });
            }

            let mut seen_components = HashSet::new();
            for entry in &page.components {
                if let Some(id) = entry.id() {
                    if !seen_components.insert(id) {
                        warnings.push(ManifestWarning::DuplicateComponent {
                            page: page.id.clone(),
                            component: id.clone(),
                        });
                    }
                }

                match entry {
                    ComponentEntry::Known(component) => {
                        let target = component.as_button().and_then(|b| b.open_page.as_ref());
                        if let Some(target) = target {
                            if self.find_page(target).is_none() {
                                warnings.push(ManifestWarning::DanglingOpenPage {
                                    page: page.id.clone(),
                                    component: component.id().clone(),
                                    target: target.clone(),
                                });
                            }
                        }
                    }
                    ComponentEntry::Unknown(unknown) => {
                        warnings.push(ManifestWarning::UnknownComponentType {
                            page: page.id.clone(),
                            type_name: unknown.type_name.clone(),
                        });
                    }
                }
            }
        }

        warnings
    }
}
