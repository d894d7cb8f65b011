use crate::database::MetadataStore;
use crate::error::ApiError;
use crate::models::{DistTagMap, PackageDetail, VersionDetail, VersionMetadata, format_timestamp};
use log::{debug, warn};

/// Joins one package with its versions, tags and build counter
pub struct DetailService;

impl DetailService {
    pub fn get_package_detail(
        store: &dyn MetadataStore,
        name: &str,
    ) -> Result<PackageDetail, ApiError> {
        let package = store
            .select_package_by_name(name)?
            .ok_or_else(|| ApiError::NotFound(format!("Package '{name}' not found")))?;

        let versions = store.select_versions_by_package(name)?;
        let tags = store.select_dist_tags_by_package(name)?;
        let build_count = store.select_stats_by_package(name)?.unwrap_or(0);

        let versions: Vec<VersionDetail> = versions
            .into_iter()
            .map(|v| {
                // A corrupt blob only costs this one version its metadata
                let metadata = VersionMetadata::parse(v.metadata.as_deref()).unwrap_or_else(|e| {
                    warn!("Ignoring metadata of {}@{}: {e}", v.package_name, v.version);
                    VersionMetadata::default()
                });

                VersionDetail {
                    version: v.version,
                    metadata,
                    tarball_path: v.tarball_path,
                    created_at: format_timestamp(v.created_at),
                }
            })
            .collect();

        let mut dist_tags = DistTagMap::new();
        for tag in tags {
            dist_tags.insert(tag.tag, tag.version);
        }

        debug!(
            "Assembled {name}: {} versions, {} tags",
            versions.len(),
            dist_tags.len()
        );

        Ok(PackageDetail {
            name: package.name,
            description: package.description,
            latest_version: package.latest_version,
            created_at: format_timestamp(package.created_at),
            updated_at: format_timestamp(package.updated_at),
            build_count,
            dist_tags,
            versions,
        })
    }
}
