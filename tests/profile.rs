// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use omoospace::{make_file, make_path, Language, MakerData, Omoospace, ToolData, WorkData};

use indoc::indoc;
use pretty_assertions::assert_eq;
use sealed_test::prelude::*;

const EN_PROFILE: &str = indoc! {r#"
    brief: A great project.

    notes:
      Film01_CharA:
        - "MaNan001: very good..."
        - "Open with Blender 5.0"
      Prop01: not game-ready.

    makers:
      MaNan001:
        email: manan001@example.com
        website: https://www.manan.com
      MaNan002: manan002@example.com
      OmooLab:
        website: https://www.omoolab.xyz

    tools:
      Blender:
        version: "v4.2.0"
        extensions:
          - Omoospace
          - BioxelNodes
        website: https://www.blender.org
      Houdini: "20.0.0"

    works:
      GreatFilm:
        brief: A great film.
        version: "1.0.0"
        contents:
          - Videos/Film01.mp4
          - Images/Film01_Cover.png
        contributions:
          Modeler:
            - MaNan003
          Animator: [MaNan002, MaNan003]
          Director: MaNan001
      GreatModel:
        - Models/Prop01/Prop01.fbx
        - Models/Prop01/Textures
      AnotherGreatModel: Models/Prop02.glb
"#};

const ZH_PROFILE: &str = indoc! {r#"
    简述: 一个超厉害的项目.

    记录列表:
      道具01: 没法在游戏引擎中使用.

    主创列表:
      马南001:
        邮箱: manan001@example.com
        网站: https://www.manan.com
      马南002: manan002@example.com

    工具列表:
      Blender:
        版本: "v4.2.0"
        扩展列表:
          Omoospace: ">=0.2.0"
          BioxelNodes: "2.0.0"
      Houdini: "20.0.0"

    作品列表:
      超厉害模型:
        - 模型/道具01/道具01.fbx
"#};

fn en_omoospace() -> anyhow::Result<Omoospace> {
    make_path(
        "MiniProject",
        [
            "Contents/Models/Prop01/Prop01.fbx",
            "Contents/Models/Prop01/Textures/",
            "Contents/Models/Prop02.glb",
            "Contents/Videos/Film01.mp4",
            "Contents/Images/Film01_Cover.png",
        ],
    )?;
    make_file("MiniProject", "Omoospace.yml", EN_PROFILE)?;
    Ok(Omoospace::discover("MiniProject")?)
}

#[sealed_test]
fn brief_round_trip_with_fallback() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;
    assert_eq!(omoospace.brief()?, "A great project.");

    omoospace.set_brief("A fantastic project.")?;
    assert_eq!(omoospace.brief()?, "A fantastic project.");

    // Without a recorded brief the omoospace name stands in.
    make_path("BareProject", ["Contents/"])?;
    make_file("BareProject", "Omoospace.yml", "")?;
    let bare = Omoospace::discover("BareProject")?;
    assert_eq!(bare.brief()?, "BareProject");

    Ok(())
}

#[sealed_test]
fn notes_read_and_append() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    assert_eq!(
        omoospace.note("Film01_CharA")?,
        vec!["MaNan001: very good...", "Open with Blender 5.0"],
    );
    assert_eq!(omoospace.note("Prop01")?, vec!["not game-ready."]);

    omoospace.add_note("Other note", "Prop01")?;
    assert_eq!(
        omoospace.note("Prop01")?,
        vec!["not game-ready.", "Other note"],
    );
    assert_eq!(omoospace.note("Missing")?, Vec::<String>::new());

    Ok(())
}

#[sealed_test]
fn maker_accessors() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let maker = omoospace.get_maker("MaNan001")?.unwrap();
    assert_eq!(maker.email()?.as_deref(), Some("manan001@example.com"));
    assert_eq!(maker.website()?.as_deref(), Some("https://www.manan.com"));

    // Bare-string shorthand reads as the email and survives a website
    // write.
    let maker = omoospace.get_maker("MaNan002")?.unwrap();
    assert_eq!(maker.email()?.as_deref(), Some("manan002@example.com"));
    assert_eq!(maker.website()?, None);
    maker.set_website("https://www.manan2.com")?;
    assert_eq!(maker.website()?.as_deref(), Some("https://www.manan2.com"));
    assert_eq!(maker.email()?.as_deref(), Some("manan002@example.com"));

    let maker = omoospace.get_maker("OmooLab")?.unwrap();
    assert_eq!(maker.email()?, None);
    assert_eq!(maker.website()?.as_deref(), Some("https://www.omoolab.xyz"));

    Ok(())
}

#[sealed_test]
fn maker_lifecycle() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let maker = omoospace.add_maker("icrdr")?;
    let makers = omoospace.makers()?;
    assert_eq!(makers.len(), 4);
    assert!(makers.iter().any(|maker| maker.name() == "icrdr"));

    maker.set_email("icrdr@abc.com")?;
    maker.set_website("https://www.icrdr.com")?;
    assert_eq!(maker.email()?.as_deref(), Some("icrdr@abc.com"));
    assert_eq!(maker.website()?.as_deref(), Some("https://www.icrdr.com"));

    assert!(maker.set_email("not-an-email").is_err());
    assert!(maker.set_website("ftp://nope").is_err());

    let mut maker = omoospace.get_maker("icrdr")?.unwrap();
    maker.rename("ICRDR")?;
    assert_eq!(maker.name(), "ICRDR");
    assert!(omoospace.get_maker("icrdr")?.is_none());

    let stale = omoospace.get_maker("ICRDR")?.unwrap();
    omoospace.remove_maker("ICRDR")?;
    assert_eq!(omoospace.makers()?.len(), 3);

    // Already removed, so the stale handle cannot remove it again.
    assert!(stale.remove().is_err());

    Ok(())
}

#[sealed_test]
fn tool_accessors() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let tool = omoospace.get_tool("Blender")?.unwrap();
    assert_eq!(tool.version()?.as_deref(), Some("4.2.0"));
    assert_eq!(tool.website()?.as_deref(), Some("https://www.blender.org"));
    assert_eq!(tool.extensions()?, vec!["Omoospace", "BioxelNodes"]);

    // Shorthand version upgrades in place as attributes accumulate.
    let tool = omoospace.get_tool("Houdini")?.unwrap();
    assert_eq!(tool.version()?.as_deref(), Some("20.0.0"));
    assert_eq!(tool.website()?, None);
    tool.set_version("21.0.0")?;
    assert_eq!(tool.version()?.as_deref(), Some("21.0.0"));
    tool.set_website("https://www.houdini.com")?;
    assert_eq!(tool.version()?.as_deref(), Some("21.0.0"));
    assert_eq!(tool.website()?.as_deref(), Some("https://www.houdini.com"));

    let tool = omoospace.get_tool("Blender")?.unwrap();
    tool.set_extensions(["Omoospace"])?;
    tool.set_version(">3.6.5")?;
    assert_eq!(tool.extensions()?, vec!["Omoospace"]);
    assert_eq!(
        omoospace.get_tool("Blender")?.unwrap().version()?.as_deref(),
        Some(">3.6.5"),
    );

    omoospace.remove_tool("Blender")?;
    assert_eq!(omoospace.tools()?.len(), 1);

    let tool = omoospace.add_tool(ToolData {
        name: "ZBrush".into(),
        version: Some("v2026.1".into()),
        ..ToolData::default()
    })?;
    assert_eq!(tool.version()?.as_deref(), Some("2026.1"));

    Ok(())
}

#[sealed_test]
fn work_accessors() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let work = omoospace.get_work("GreatFilm")?.unwrap();
    assert_eq!(work.brief()?.as_deref(), Some("A great film."));
    assert_eq!(work.version()?.as_deref(), Some("1.0.0"));
    assert_eq!(
        work.contents()?,
        vec!["Videos/Film01.mp4", "Images/Film01_Cover.png"],
    );
    let contributions = work.contributions()?;
    assert_eq!(
        contributions.iter().find(|(group, _)| group == "Animator"),
        Some(&("Animator".to_owned(), vec!["MaNan002".to_owned(), "MaNan003".to_owned()])),
    );
    assert_eq!(
        contributions.iter().find(|(group, _)| group == "Director"),
        Some(&("Director".to_owned(), vec!["MaNan001".to_owned()])),
    );

    // List shorthand: the entry is its own content listing.
    let work = omoospace.get_work("GreatModel")?.unwrap();
    assert_eq!(work.brief()?, None);
    assert_eq!(work.version()?, None);
    assert_eq!(
        work.contents()?,
        vec!["Models/Prop01/Prop01.fbx", "Models/Prop01/Textures"],
    );
    assert!(work.contributions()?.is_empty());
    work.add_contribution(["MaNan003"], Some("Modeler"))?;
    assert_eq!(
        work.contributions()?,
        vec![("Modeler".to_owned(), vec!["MaNan003".to_owned()])],
    );
    assert_eq!(
        work.contents()?,
        vec!["Models/Prop01/Prop01.fbx", "Models/Prop01/Textures"],
    );

    // String shorthand: a single content path.
    let work = omoospace.get_work("AnotherGreatModel")?.unwrap();
    assert_eq!(work.contents()?, vec!["Models/Prop02.glb"]);
    work.set_brief("A great model.")?;
    assert_eq!(work.brief()?.as_deref(), Some("A great model."));
    assert_eq!(work.contents()?, vec!["Models/Prop02.glb"]);

    // Crediting makers registers them in the maker listing.
    let makers_before = omoospace.makers()?.len();
    work.set_contributions(vec![(
        "Modeler".to_owned(),
        vec!["manan".to_owned(), "manan2".to_owned()],
    )])?;
    assert_eq!(work.contributions()?.len(), 1);
    assert_eq!(omoospace.makers()?.len(), makers_before + 2);

    // Deleting delivered files drops them from the content listing.
    std::fs::remove_dir_all("MiniProject/Contents/Models")?;
    assert!(work.contents()?.is_empty());

    omoospace.remove_work("AnotherGreatModel")?;
    assert_eq!(omoospace.works()?.len(), 2);

    Ok(())
}

#[sealed_test]
fn work_upsert_with_payload() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let work = omoospace.add_work(WorkData {
        name: "Cover".into(),
        brief: Some("Key art.".into()),
        version: Some("v2.0.0".into()),
        contents: Some(vec![
            "Images/Film01_Cover.png".into(),
            "Images/Missing.png".into(),
        ]),
    })?;

    assert_eq!(work.brief()?.as_deref(), Some("Key art."));
    assert_eq!(work.version()?.as_deref(), Some("2.0.0"));
    // Nonexistent content paths are dropped on write.
    assert_eq!(work.contents()?, vec!["Images/Film01_Cover.png"]);

    Ok(())
}

#[sealed_test]
fn maker_upsert_with_payload() -> anyhow::Result<()> {
    let omoospace = en_omoospace()?;

    let maker = omoospace.add_maker(MakerData {
        name: "OmooFan".into(),
        email: Some("fan@omoolab.xyz".into()),
        website: None,
    })?;
    assert_eq!(maker.email()?.as_deref(), Some("fan@omoolab.xyz"));

    Ok(())
}

#[sealed_test]
fn zh_profile_speaks_localized_keys() -> anyhow::Result<()> {
    make_path(
        "MiniProject",
        ["Contents/模型/道具01/道具01.fbx", "Subspaces/"],
    )?;
    make_file("MiniProject", "Omoospace.zh.yml", ZH_PROFILE)?;
    let omoospace = Omoospace::discover_with_language("MiniProject", Some(Language::Zh))?;
    assert_eq!(omoospace.language(), Language::Zh);

    assert_eq!(omoospace.brief()?, "一个超厉害的项目.");
    omoospace.set_brief("一个超酷的项目.")?;
    assert_eq!(omoospace.brief()?, "一个超酷的项目.");

    assert_eq!(omoospace.note("道具01")?, vec!["没法在游戏引擎中使用."]);
    omoospace.add_note("其他记录", "道具01")?;
    assert_eq!(
        omoospace.note("道具01")?,
        vec!["没法在游戏引擎中使用.", "其他记录"],
    );

    let maker = omoospace.get_maker("马南001")?.unwrap();
    assert_eq!(maker.email()?.as_deref(), Some("manan001@example.com"));
    let maker = omoospace.get_maker("马南002")?.unwrap();
    assert_eq!(maker.email()?.as_deref(), Some("manan002@example.com"));

    // Extension listings pinned as name/version pairs read by key.
    let tool = omoospace.get_tool("Blender")?.unwrap();
    assert_eq!(tool.version()?.as_deref(), Some("4.2.0"));
    assert_eq!(tool.extensions()?, vec!["Omoospace", "BioxelNodes"]);
    let tool = omoospace.get_tool("Houdini")?.unwrap();
    assert_eq!(tool.version()?.as_deref(), Some("20.0.0"));

    let work = omoospace.get_work("超厉害模型")?.unwrap();
    assert_eq!(work.contents()?, vec!["模型/道具01/道具01.fbx"]);

    Ok(())
}
