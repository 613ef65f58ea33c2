use anyhow::Context;
use chrono::{Datelike, Timelike};
use std::fs;
use std::path::{Path, PathBuf};
use urania::ephemeris::BirthData;

pub struct Artifacts {
    pub report: String,
    pub svg: String,
    pub html: String,
    pub json: Option<String>,
}

/// `Y_M_D_h_m_lon_lat`, coordinates with two decimals. Used for the
/// folder and every file in it.
pub fn chart_stem(birth: &BirthData) -> String {
    let local = birth.local;
    format!(
        "{}_{}_{}_{}_{}_{:.2}_{:.2}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        birth.location.lon,
        birth.location.lat
    )
}

/// Write every artefact into `<out_dir>/<stem>/`, reusing the folder when it
/// already exists.
pub fn write_artifacts(
    out_dir: &Path,
    birth: &BirthData,
    artifacts: &Artifacts,
) -> anyhow::Result<PathBuf> {
    let stem = chart_stem(birth);
    let folder = out_dir.join(&stem);
    if folder.is_dir() {
        log::info!("reusing folder {}", folder.display());
    } else {
        fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create {}", folder.display()))?;
        log::info!("created folder {}", folder.display());
    }

    let mut files = vec![
        ("txt", &artifacts.report),
        ("svg", &artifacts.svg),
        ("html", &artifacts.html),
    ];
    if let Some(json) = &artifacts.json {
        files.push(("json", json));
    }
    for (ext, content) in files {
        let path = folder.join(format!("{stem}.{ext}"));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use urania::ephemeris::GeoLocation;

    fn birth() -> BirthData {
        BirthData::new(
            NaiveDate::from_ymd_opt(1990, 1, 5)
                .unwrap()
                .and_hms_opt(3, 7, 0)
                .unwrap(),
            GeoLocation {
                lat: 25.033,
                lon: 121.565,
            },
        )
    }

    #[test]
    fn stem_uses_unpadded_date_and_two_decimals() {
        assert_eq!(chart_stem(&birth()), "1990_1_5_3_7_121.56_25.03");
    }

    #[test]
    fn writes_into_existing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts {
            report: "report".to_string(),
            svg: "<svg/>".to_string(),
            html: "<html/>".to_string(),
            json: None,
        };
        let first = write_artifacts(dir.path(), &birth(), &artifacts).unwrap();
        let second = write_artifacts(dir.path(), &birth(), &artifacts).unwrap();
        assert_eq!(first, second);

        let stem = chart_stem(&birth());
        assert_eq!(
            fs::read_to_string(first.join(format!("{stem}.txt"))).unwrap(),
            "report"
        );
        assert!(first.join(format!("{stem}.svg")).exists());
        assert!(!first.join(format!("{stem}.json")).exists());
    }
}
