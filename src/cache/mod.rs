//! 对象缓存层
//!
//! 通过插件注册表在启动时选择缓存后端（Moka 内存缓存或 Redis），
//! 业务层只面向 `ObjectCache` trait。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端插件
///
/// 在模块加载时（ctor）把构造函数注册进插件表，
/// 后端类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        ::paste::paste! {
            #[::ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $plugin::new()
                                .map_err($crate::errors::SiakadError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
