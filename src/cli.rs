use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pixel-scale",
    about = "Resizes images using nearest neighbour interpolation",
    long_about = "pixel-scale upscales images by an integer factor with nearest neighbour sampling, \
                  so pixel art stays crisp. A single file is written to the export directory; a \
                  directory is mirrored into the export directory and every supported image in it \
                  (png, jpg, jpeg, webp, bmp, tga, heic) is converted. Output is always PNG.",
    version,
    after_help = "EXAMPLES:\n  \
    pixel-scale sprite.png\n  \
    pixel-scale ./sprites -r -s 4\n  \
    pixel-scale ./tiles -d -e ./build/tiles"
)]
pub struct Args {
    #[arg(
        value_name = "FILE_OR_DIRECTORY",
        help = "Path to an image file or a directory",
        long_help = "Path to an image file or a directory. \
                     Image: process that image. Directory: process all images in that directory."
    )]
    pub target: PathBuf,

    #[arg(
        short = 'r',
        long,
        help = "Also process immediate subdirectories (one level only)",
        long_help = "If a directory is passed, also process the images in each of its \
                     subdirectories, but not in subdirectories within those."
    )]
    pub recursive: bool,

    #[arg(
        short = 'd',
        long,
        conflicts_with = "quiet",
        help = "Print the resolved options and each image as it is processed"
    )]
    pub debug: bool,

    #[arg(
        short = 's',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Scale factor (default: 10, integers only)"
    )]
    pub scale: Option<i64>,

    #[arg(
        short = 'e',
        long,
        value_name = "PATH",
        help = "Path to export directory (default: export)"
    )]
    pub export: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        help = "Losslessly optimize the output PNGs with oxipng"
    )]
    pub optimize: bool,

    #[arg(short = 'q', long, help = "Only print errors")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["pixel-scale", "sprites"]).unwrap();
        assert_eq!(args.target, PathBuf::from("sprites"));
        assert!(!args.recursive);
        assert!(!args.debug);
        assert_eq!(args.scale, None);
        assert_eq!(args.export, None);
        assert!(!args.optimize);
    }

    #[test]
    fn test_parse_short_flags() {
        let args =
            Args::try_parse_from(["pixel-scale", "sprites", "-r", "-d", "-s", "4", "-e", "out"])
                .unwrap();
        assert!(args.recursive);
        assert!(args.debug);
        assert_eq!(args.scale, Some(4));
        assert_eq!(args.export, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_negative_scale() {
        let args = Args::try_parse_from(["pixel-scale", "a.png", "--scale", "-3"]).unwrap();
        assert_eq!(args.scale, Some(-3));
    }

    #[test]
    fn test_parse_non_integer_scale_fails() {
        assert!(Args::try_parse_from(["pixel-scale", "a.png", "-s", "1.5"]).is_err());
    }

    #[test]
    fn test_debug_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["pixel-scale", "a.png", "-d", "-q"]).is_err());
    }

    #[test]
    fn test_target_is_required() {
        assert!(Args::try_parse_from(["pixel-scale"]).is_err());
    }
}
