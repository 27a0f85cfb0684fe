pub mod render_annotated_images_use_case;
pub mod summarize_clusters_use_case;
pub mod view_cluster_use_case;
pub mod view_state;
