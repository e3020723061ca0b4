use album_tiler::*;

#[test]
fn test_defaults_match_catalog() {
    let options = LayoutOptions::default();

    assert_eq!(options.template, Template::A4);
    assert_eq!(options.columns, 2);
    assert_eq!(options.row_gap, 32);
    assert_eq!(options.column_gap, 32);
    assert_eq!(options.padding_x, 100);
    assert_eq!(options.padding_y, 100);
    assert_eq!(options.background, Color::WHITE);
    assert_eq!(options.number_start, 1);
    assert_eq!(options.number_corner, NumberCorner::RightBottom);
    assert_eq!(options.number_size, 36);
    assert_eq!(options.number_color, Color::new(0x6c, 0x6c, 0x6c));
}

#[test]
fn test_normalized_clamps_minimums() {
    let options = LayoutOptions {
        columns: 0,
        number_start: 0,
        number_size: 0,
        ..Default::default()
    }
    .normalized();

    assert_eq!(options.columns, 1);
    assert_eq!(options.number_start, 1);
    assert_eq!(options.number_size, 1);
}

#[test]
fn test_color_parsing() {
    assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::WHITE);
    assert_eq!(Color::from_hex("6c6c6c").unwrap(), Color::new(0x6c, 0x6c, 0x6c));
    assert_eq!(Color::from_hex("#6C6C6C").unwrap(), Color::new(0x6c, 0x6c, 0x6c));

    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gggggg").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn test_color_displays_as_hex() {
    assert_eq!(Color::new(0x12, 0xab, 0x00).to_string(), "#12ab00");
}

#[test]
fn test_image_asset_filtering() {
    let assets = vec![
        ImageAsset::new("a.jpg", vec![]),
        ImageAsset::new("b.jpeg", vec![]),
        ImageAsset::new("c.PNG", vec![]),
        ImageAsset::new("d.gif", vec![]),
        ImageAsset::new("notes.txt", vec![]),
        ImageAsset::new("noext", vec![]),
    ];

    let kept = filter_image_assets(assets);
    let names: Vec<_> = kept.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.jpeg", "c.PNG", "d.gif"]);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = LayoutOptions {
        template: Template::B5,
        columns: 3,
        row_gap: 10,
        background: Color::new(0x10, 0x20, 0x30),
        number_corner: NumberCorner::LeftBottom,
        number_start: 7,
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = LayoutOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_clamps_raw_input() {
    use std::io::Write;

    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r##"{{"template":"a5","columns":0,"row_gap":5,"column_gap":5,
            "padding_y":0,"padding_x":0,"background":"#ffffff",
            "number_start":0,"number_corner":"left-bottom",
            "number_size":0,"number_color":"#000000"}}"##
    )
    .unwrap();

    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.template, Template::A5);
    assert_eq!(loaded.columns, 1);
    assert_eq!(loaded.number_start, 1);
    assert_eq!(loaded.number_size, 1);
}
