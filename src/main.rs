use std::error::Error;
use std::io::{stdin, stdout, Read};
use std::path::Path;
use std::process::exit;

use clap::{crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};

use bibertag::converter::Converter;
use bibertag::corpus::{Corpus, DEFAULT_EXTENSION};
use bibertag::resources::write_resources;
use bibertag::sentence::Sentence;
use bibertag::text::{Text, TextOptions};
use bibertag::writer::{Writer, WriterOptions};

// Subcommand names
const TAG_SUB_CMD: &str = "tag";
const CONVERT_SUB_CMD: &str = "convert";
const RESOURCES_SUB_CMD: &str = "resources";

// Argument names
const EXT_ARG: &str = "ext";
const FOLDER_ARG: &str = "folder";
const FPATH_OUT_ARG: &str = "fpath_out";
const FPATH_SETTING_ARG: &str = "fpath_setting";
const HEADER_END_ARG: &str = "header_end";
const IN_FILES_ARG: &str = "in_files";
const NEW_FOLDER_ARG: &str = "new_folder";
const OUT_DIR_ARG: &str = "out_dir";
const QUIET_ARG: &str = "quiet";
const RESOURCE_DIR_ARG: &str = "resource_dir";
const STOP_AT_ARG: &str = "stop_at";
const STRIP_SOURCE_TAG_ARG: &str = "strip_source_tag";
const VERBOSE_ARG: &str = "verbose";

fn unwrap<T, E: Error>(t: Result<T, E>) -> T {
  match t {
    Ok(t) => t,
    Err(e) => {
      eprintln!("{}: error: {}", crate_name!(), e);
      exit(1);
    }
  }
}

fn setup_converter(args: &ArgMatches) -> Converter {
  unwrap(Converter::setup(
    args.value_of(FPATH_SETTING_ARG),
    args.value_of(RESOURCE_DIR_ARG),
  ))
}

fn text_options(args: &ArgMatches) -> TextOptions {
  TextOptions {
    header_end: args
      .value_of(HEADER_END_ARG)
      .and_then(|v| v.parse().ok())
      .unwrap_or(0),
    ..Default::default()
  }
}

fn tag(args: &ArgMatches) {
  let tagger = setup_converter(args).create();
  let options = text_options(args);
  let texts: Vec<Text> = match args.values_of(IN_FILES_ARG) {
    Some(files) => files
      .map(|f| unwrap(Text::open(f, options.clone())))
      .collect(),
    None => {
      let mut input = String::new();
      unwrap(stdin().read_to_string(&mut input));
      vec![Text::from_str(&input, options)]
    }
  };
  let mut sentences: Vec<Sentence> = vec![];
  for text in texts.iter() {
    sentences.extend(unwrap(text.parse(&tagger)));
  }
  let writer = Writer::new(WriterOptions {
    keep_source_tag: !args.is_present(STRIP_SOURCE_TAG_ARG),
    ..Default::default()
  });
  match args.value_of(FPATH_OUT_ARG) {
    Some(path) => unwrap(writer.write_file(&sentences, path)),
    None => {
      unwrap(writer.write(&sentences, &mut stdout().lock()));
      println!();
    }
  }
}

fn convert(args: &ArgMatches) {
  let tagger = setup_converter(args).create();
  let corpus = unwrap(Corpus::new(args.value_of(FOLDER_ARG).unwrap_or(".")))
    .with_options(text_options(args), WriterOptions::default());
  let stop_at = args.value_of(STOP_AT_ARG).and_then(|v| v.parse().ok());
  let summary = unwrap(corpus.convert(
    &tagger,
    args.value_of(NEW_FOLDER_ARG).unwrap_or("."),
    args.value_of(EXT_ARG).unwrap_or(DEFAULT_EXTENSION),
    stop_at,
  ));
  if !summary.failed.is_empty() {
    eprintln!(
      "{}: {} file(s) could not be converted",
      crate_name!(),
      summary.failed.len()
    );
  }
}

fn resources(args: &ArgMatches) {
  let dir = args.value_of(OUT_DIR_ARG).unwrap_or(".");
  for name in unwrap(write_resources(dir)) {
    println!("{}", Path::new(dir).join(name).display());
  }
}

fn in_files_validator(in_file: String) -> Result<(), String> {
  if Path::new(&in_file).is_file() {
    Ok(())
  } else {
    Err(format!("{}: error: {} doesn't exist", crate_name!(), in_file))
  }
}

fn dir_validator(dir: String) -> Result<(), String> {
  if Path::new(&dir).is_dir() {
    Ok(())
  } else {
    Err(format!("{}: error: {} is not a directory", crate_name!(), dir))
  }
}

fn number_validator(n: String) -> Result<(), String> {
  n.parse::<usize>()
    .map(|_| ())
    .map_err(|_| format!("{} is not a non-negative integer", n))
}

fn setting_args<'a, 'b>(subcommand: App<'a, 'b>) -> App<'a, 'b> {
  subcommand
    .arg(
      Arg::with_name(FPATH_SETTING_ARG)
        .short("r")
        .takes_value(true)
        .help("the setting file in JSON format"),
    )
    .arg(
      Arg::with_name(RESOURCE_DIR_ARG)
        .short("p")
        .takes_value(true)
        .help("directory the lexical tables are read from"),
    )
    .arg(
      Arg::with_name(HEADER_END_ARG)
        .long("header-end")
        .takes_value(true)
        .validator(number_validator)
        .help("number of leading sentence chunks to skip"),
    )
}

fn main() {
  let tag_subcommand = setting_args(
    SubCommand::with_name(TAG_SUB_CMD)
      .about("Tag source-tagged text")
      .help_message("(default) see `tag -h`"),
  )
  .arg(
    Arg::with_name(FPATH_OUT_ARG)
      .short("o")
      .takes_value(true)
      .help("the output file"),
  )
  .arg(
    Arg::with_name(STRIP_SOURCE_TAG_ARG)
      .short("s")
      .help("leave the source tag column out"),
  )
  .arg(
    Arg::with_name(IN_FILES_ARG)
      .takes_value(true)
      .multiple(true)
      .help("source-tagged files (stdin when omitted)")
      .validator(in_files_validator),
  );

  let convert_subcommand = setting_args(
    SubCommand::with_name(CONVERT_SUB_CMD)
      .about("Convert a folder of source-tagged files")
      .help_message("see `convert -h`"),
  )
  .arg(
    Arg::with_name(EXT_ARG)
      .short("e")
      .long("ext")
      .takes_value(true)
      .default_value(DEFAULT_EXTENSION)
      .help("extension of the converted files"),
  )
  .arg(
    Arg::with_name(STOP_AT_ARG)
      .short("n")
      .takes_value(true)
      .validator(number_validator)
      .help("maximum number of files to convert"),
  )
  .arg(
    Arg::with_name(FOLDER_ARG)
      .required(true)
      .validator(dir_validator)
      .help("folder of source-tagged files"),
  )
  .arg(
    Arg::with_name(NEW_FOLDER_ARG)
      .required(true)
      .help("folder the converted files are written to"),
  );

  let resources_subcommand = SubCommand::with_name(RESOURCES_SUB_CMD)
    .about("Write the default settings and lexical tables")
    .help_message("see `resources -h`")
    .arg(
      Arg::with_name(OUT_DIR_ARG)
        .short("o")
        .takes_value(true)
        .required(true)
        .help("output directory"),
    );

  let mut app = App::new("Register Analysis Tagger")
    .version(crate_version!())
    .setting(AppSettings::VersionlessSubcommands)
    .arg(
      Arg::with_name(VERBOSE_ARG)
        .short("v")
        .multiple(true)
        .global(true)
        .help("increase log verbosity"),
    )
    .arg(
      Arg::with_name(QUIET_ARG)
        .short("q")
        .global(true)
        .help("silence all log output"),
    )
    .subcommand(tag_subcommand)
    .subcommand(convert_subcommand)
    .subcommand(resources_subcommand);
  let matches = app.clone().get_matches();

  let (name, sub_matches) = matches.subcommand();
  let log_args = sub_matches.unwrap_or(&matches);
  unwrap(
    stderrlog::new()
      .module(module_path!())
      .quiet(log_args.is_present(QUIET_ARG))
      .verbosity(log_args.occurrences_of(VERBOSE_ARG) as usize + 1)
      .init(),
  );

  match (name, sub_matches) {
    (TAG_SUB_CMD, Some(tag_matches)) => tag(tag_matches),
    (CONVERT_SUB_CMD, Some(convert_matches)) => convert(convert_matches),
    (RESOURCES_SUB_CMD, Some(resources_matches)) => resources(resources_matches),
    _ => {
      if app.print_help().is_err() {
        exit(1);
      }
      println!();
    }
  }
}
