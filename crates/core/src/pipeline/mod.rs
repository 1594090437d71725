pub mod annotate_image_use_case;
