use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::schools::requests::CreateSchoolRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);

                // 如果配置的缓存失败，尝试回退策略
                if cache_type == "redis" {
                    warn!("Falling back to memory cache");
                    if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                        match fallback_constructor().await {
                            Ok(cache) => {
                                warn!(
                                    "Successfully created fallback Moka (in-memory) cache backend"
                                );
                                return Ok(Arc::from(cache));
                            }
                            Err(fallback_e) => {
                                warn!("Failed to create fallback Moka cache: {}", fallback_e);
                            }
                        }
                    }
                }
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);

        // 如果找不到配置的缓存类型，尝试默认的内存缓存
        if cache_type != "moka" {
            warn!("Falling back to default memory cache");
            if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                match fallback_constructor().await {
                    Ok(cache) => {
                        warn!("Successfully created fallback Moka (in-memory) cache backend");
                        return Ok(Arc::from(cache));
                    }
                    Err(fallback_e) => {
                        warn!("Failed to create fallback Moka cache: {}", fallback_e);
                    }
                }
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 初始化默认学校
/// 如果数据库中没有任何学校，则创建一条默认记录，
/// 保证登录下拉框在首次部署时有可选项。
async fn seed_school(storage: &Arc<dyn Storage>) {
    // 检查是否已有学校
    match storage.count_schools().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} school(s), skipping school seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No schools found in database, creating default school...");
        }
        Err(e) => {
            warn!("Failed to count schools: {}, skipping school seed", e);
            return;
        }
    }

    let seed_request = CreateSchoolRequest {
        npsn: std::env::var("SEED_SCHOOL_NPSN").unwrap_or_else(|_| "00000000".to_string()),
        name: std::env::var("SEED_SCHOOL_NAME")
            .unwrap_or_else(|_| AppConfig::get().app.system_name.clone()),
        level: "smp".to_string(),
        address: None,
        phone: None,
        email: None,
        headmaster_name: None,
    };

    match storage.create_school(seed_request).await {
        Ok(school) => {
            info!(
                "Default school created successfully (ID: {}, name: {})",
                school.id, school.name
            );
        }
        Err(e) => {
            warn!("Failed to create default school: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和路由配置等
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认学校（如果需要）
    seed_school(&storage).await;

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}
