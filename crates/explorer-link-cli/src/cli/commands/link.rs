//! `explorer-link uri|view|share` – build a link from command-line values.

use anyhow::Result;
use explorer_link_core::config::LinkConfig;
use explorer_link_core::{Point, SpatialReference, UriLinkBuilder};

use crate::cli::{LinkArgs, OutputKind};

pub fn run_link(cfg: &LinkConfig, args: &LinkArgs, output: OutputKind) -> Result<()> {
    let builder = builder_from_args(cfg, args)?;
    println!("{}", render(&builder, output)?);
    Ok(())
}

/// Configured defaults first, then whatever the flags override.
pub(super) fn builder_from_args(cfg: &LinkConfig, args: &LinkArgs) -> Result<UriLinkBuilder> {
    let mut builder = UriLinkBuilder::new(args.item_id.as_str())?;
    builder.apply_config(cfg);

    if let Some(scale) = args.scale {
        builder.scale(scale);
    }
    if let Some(rotation) = args.rotation {
        builder.rotation(rotation);
    }

    match (&args.address, args.x, args.y) {
        (Some(address), _, _) => {
            builder.center_address(address.as_str());
        }
        (None, Some(x), Some(y)) => match args.wkid {
            Some(wkid) => {
                builder.center_geo_point(&Point::new(x, y, SpatialReference::new(wkid)))?;
            }
            None => {
                builder.center_point(x, y);
            }
        },
        _ => {}
    }

    Ok(builder)
}

pub(super) fn render(builder: &UriLinkBuilder, output: OutputKind) -> Result<String> {
    let text = match output {
        OutputKind::Uri => builder.build_uri()?.to_string(),
        OutputKind::View => serde_json::to_string_pretty(&builder.build_view_intent()?)?,
        OutputKind::Share => serde_json::to_string_pretty(&builder.build_share_intent()?)?,
    };
    tracing::info!(?output, "rendered explorer link");
    Ok(text)
}
