use std::fs::{create_dir_all, File};
use std::io::{Error as IOError, Write};
use std::path::Path;

use crate::config::{
  LEXICON_FILE, REPLACEMENT_FILE, TAG_MATCH_FILE, TOKEN_MATCH_FILE, TOKEN_TAG_MATCH_FILE,
};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub fn default_resource(key: &str) -> Option<&'static str> {
  match key {
    TAG_MATCH_FILE => Some(TAG_MATCH_CSV),
    TOKEN_MATCH_FILE => Some(TOKEN_MATCH_CSV),
    TOKEN_TAG_MATCH_FILE => Some(TOKEN_TAG_MATCH_CSV),
    REPLACEMENT_FILE => Some(REPLACEMENTS_CSV),
    LEXICON_FILE => Some(LEXICON_JSON),
    _ => None,
  }
}

fn write_if_missing(path: &Path, content: &str) -> Result<bool, IOError> {
  if path.exists() {
    return Ok(false);
  }
  File::create(path)?.write_all(content.as_bytes())?;
  Ok(true)
}

/// Writes the default settings and every default table into `dir`, leaving
/// files that already exist alone. Returns the names of the files written.
pub fn write_resources<P: AsRef<Path>>(dir: P) -> Result<Vec<&'static str>, IOError> {
  let dir = dir.as_ref();
  if !dir.exists() {
    create_dir_all(dir)?;
  }
  let files = [
    (SETTINGS_FILE_NAME, SETTINGS_JSON),
    ("tag_match.csv", TAG_MATCH_CSV),
    ("token_match.csv", TOKEN_MATCH_CSV),
    ("token_tag_match.csv", TOKEN_TAG_MATCH_CSV),
    ("replacements.csv", REPLACEMENTS_CSV),
    ("lexicon.json", LEXICON_JSON),
  ];
  let mut written = vec![];
  for (name, content) in files.iter() {
    if write_if_missing(&dir.join(name), content)? {
      written.push(*name);
    }
  }
  Ok(written)
}

pub const SETTINGS_JSON: &str = r#"{
  "tagVectorWidth": 6,
  "phrasalVerbRange": 4,
  "passiveRange": 4,
  "extrapositionRange": 7,
  "tagMatchFile": "tag_match.csv",
  "tokenMatchFile": "token_match.csv",
  "tokenTagMatchFile": "token_tag_match.csv",
  "replacementFile": "replacements.csv",
  "lexiconFile": "lexicon.json",
  "annotationPass": [
    { "class": "TagNormalizer" },
    { "class": "PhrasalVerbDetector" },
    { "class": "PassiveClassifier" },
    { "class": "ExtrapositionClassifier" },
    { "class": "ProperNounClassifier" },
    { "class": "ModalClassifier" },
    { "class": "StaticFallbackMatcher" }
  ]
}
"#;

/// `source_tag,slot,value`
pub const TAG_MATCH_CSV: &str = r#"# punctuation
",",0,Y
",",1,COM
;,0,Y
;,1,SCOL
:,0,Y
:,1,COL
?,0,Y
?,1,QUE
!,0,Y
!,1,EXCL
.,0,Y
.,1,PER
(,0,Y
(,1,PAR
(,2,L
),0,Y
),1,PAR
),2,R
',0,Y
',1,APO
"""",0,Y
"""",1,QUO
-,0,Y
-,1,DSH
# determiners
AT,0,DET
AT,1,AT
AT,2,DEF
AT,3,SING
AT1,0,DET
AT1,1,AT
AT1,2,INDEF
AT1,3,SING
DA1,0,AP
DA2,0,APS
DAR,0,AP
DAT,0,AP
DB,0,ABN
DB2,0,ABX
# object pronouns
PPIO1,0,P
PPIO1,1,PER
PPIO1,2,SING
PPIO1,3,1
PPIO1,4,O
PPIO2,0,P
PPIO2,1,PER
PPIO2,2,PLUR
PPIO2,3,1
PPIO2,4,O
PPHO1,0,P
PPHO1,1,PER
PPHO1,2,SING
PPHO1,3,3
PPHO1,4,O
PPHO2,0,P
PPHO2,1,PER
PPHO2,2,PLUR
PPHO2,3,3
PPHO2,4,O
# possessive, indefinite and reflexive pronouns
PPGE,0,P
PPGE,1,PER
PPGE,4,POS
PN,0,P
PN1,0,P
PN1,1,N
PN1,3,0
PNX1,0,P
PNX1,1,N
PNX1,3,0
PNX1,4,X
EX,0,EX
EX,1,PEX
# nouns
NNU1,0,NNU
NNU2,0,NNUS
NNU,0,NNU
NNL1,0,NPL
NNL2,0,NPLS
NNB,0,NPT
NNA,0,NPT
NPD1,0,NR
NPD2,0,NRS
NPM1,0,NR
NPM2,0,NRS
ND1,0,NR
# numbers
MC1,0,CD1
MC,0,CD
MD,0,OD
NNO,0,CD1
NNO2,0,CDS
ZZ1,0,ZZ
ZZ2,0,ZZ
# infinitive marker and subordinators
TO,0,TO
CSA,0,C
CSA,1,S
CST,0,C
CST,1,S
CSN,0,C
CSN,1,S
CSW,0,C
CSW,1,S
CSW,2,WH
# miscellaneous
FW,0,&FW
GE,0,$
UH,0,UH
"#;

/// `word,slot,value`
pub const TOKEN_MATCH_CSV: &str = r#"# possessive determiners
my,0,PP$
my,1,PP1
your,0,PP$
your,1,PP2
our,0,PP$
our,1,PP2
its,0,PP$
its,1,IT
his,0,PP$
his,1,PP3
their,0,PP$
their,1,PP3
either,0,DTX
# modals
would,0,MD
would,1,PRD
shall,0,MD
shall,1,PRD
'll,0,MD
'll,1,PRD
'll,4,0
'd,0,MD
'd,1,PRD
'd,4,0
cannot,0,MD
cannot,1,POS
could,0,MD
could,1,POS
# negation
not,0,XNOT
not,2,NOT
n't,0,XNOT
n't,2,NOT
n't,4,0
"#;

/// `word,source_tag,slot,value`
pub const TOKEN_TAG_MATCH_CSV: &str = r#"her,APPGE,0,PP$
her,APPGE,1,PP3
may,VM,0,MD
may,VM,1,POS
might,VM,0,MD
might,VM,1,POS
can,VM,0,MD
can,VM,1,POS
will,VM,0,MD
will,VM,1,PRD
wilt,VM,0,MD
wilt,VM,1,PRD
"#;

/// `from_tag,to_tag`; ditto tags of multi-word units collapse to their base tag.
pub const REPLACEMENTS_CSV: &str = r#"II21,II
II22,II
II31,II
II32,II
II33,II
II41,II
II42,II
II43,II
II44,II
RR21,RR
RR22,RR
RR31,RR
RR32,RR
RR33,RR
RR41,RR
RR42,RR
RR43,RR
RR44,RR
RG21,RG
RG22,RG
RG31,RG
RG32,RG
RG33,RG
RL21,RL
RL22,RL
RL31,RL
RL32,RL
RL33,RL
RT21,RT
RT22,RT
RT31,RT
RT32,RT
RT33,RT
CS21,CS
CS22,CS
CS31,CS
CS32,CS
CS33,CS
CC21,CC
CC22,CC
CC31,CC
CC32,CC
CC33,CC
DD21,DD
DD22,DD
DD31,DD
DD32,DD
DD33,DD
JJ21,JJ
JJ22,JJ
JJ31,JJ
JJ32,JJ
JJ33,JJ
NN121,NN1
NN122,NN1
NN131,NN1
NN132,NN1
NN133,NN1
NN221,NN2
NN222,NN2
NN231,NN2
NN232,NN2
NN233,NN2
PN121,PN1
PN122,PN1
PN131,PN1
PN132,PN1
PN133,PN1
MC21,MC
MC22,MC
MC31,MC
MC32,MC
MC33,MC
"#;

pub const LEXICON_JSON: &str = r#"{
  "wh_complementizers": [
    "how", "what", "where", "which", "who", "whom", "whose", "why"
  ],
  "extraposing_verbs": [
    "appear", "appeared", "appearing", "appears", "follow", "followed", "following", "follows",
    "seem", "seemed", "seeming", "seems", "show", "showed", "showing", "shown", "shows"
  ],
  "extraposed_to_verbs": [
    "help", "helped", "helping", "helps", "take", "taken", "takes", "taking", "took"
  ],
  "extraposing_adjectives": [
    "acceptable", "accepted", "advisable", "amazing", "annoying", "anomalous", "apparent",
    "appropriate", "astonishing", "awful", "certain", "clear", "conceivable", "correct",
    "critical", "crucial", "curious", "desirable", "disappointing", "doubtful", "dreadful",
    "embarrassing", "essential", "evident", "extraordinary", "false", "fitting", "fortunate",
    "frightening", "funny", "good", "great", "horrible", "imperative", "important",
    "impossible", "incidental", "inconceivable", "incredible", "indisputable", "inevitable",
    "interesting", "ironic", "irritating", "likely", "lucky", "natural", "neat", "necessary",
    "nice", "notable", "noteworthy", "noticeable", "obligatory", "obvious", "odd", "okay",
    "paradoxical", "peculiar", "plain", "possible", "preferable", "probable", "ridiculous",
    "right", "sad", "sensible", "shocking", "silly", "strange", "stupid", "sufficient",
    "surprising", "tragic", "true", "typical", "unacceptable", "understandable", "unfair",
    "unfortunate", "unlikely", "unlucky", "unthinkable", "untypical", "unusual", "upsetting",
    "vital", "well-known", "wonderful"
  ],
  "necessity_modals": [
    ["must"], ["should"], ["had", "better"], ["'d", "better"], ["better"], ["have", "to"],
    ["need", "to"], ["ought", "to"], ["'s", "got", "to"], ["'ve", "got", "to"],
    ["have", "got", "to"], ["be", "supposed", "to"], ["'m", "supposed", "to"],
    ["am", "supposed", "to"], ["is", "supposed", "to"], ["'s", "supposed", "to"],
    ["are", "supposed", "to"], ["'re", "supposed", "to"], ["was", "supposed", "to"],
    ["were", "supposed", "to"], ["being", "supposed", "to"], ["has", "got", "to"],
    ["been", "supposed", "to"], ["be", "to"], ["is", "to"], ["'s", "to"], ["am", "to"],
    ["'m", "to"], ["are", "to"], ["'re", "to"], ["was", "to"], ["were", "to"], ["been", "to"],
    ["being", "to"]
  ],
  "possibility_modals": [
    ["can"], ["could"], ["may"], ["might"], ["is", "able", "to"], ["'s", "able", "to"],
    ["am", "able", "to"], ["'m", "able", "to"], ["be", "able", "to"], ["are", "able", "to"],
    ["'re", "able", "to"], ["was", "able", "to"], ["were", "able", "to"],
    ["being", "able", "to"], ["been", "able", "to"], ["be", "permitted", "to"],
    ["is", "permitted", "to"], ["'s", "permitted", "to"], ["am", "permitted", "to"],
    ["'m", "permitted", "to"], ["are", "permitted", "to"], ["'re", "permitted", "to"],
    ["was", "permitted", "to"], ["were", "permitted", "to"], ["been", "permitted", "to"],
    ["being", "permitted", "to"], ["be", "allowed", "to"], ["is", "allowed", "to"],
    ["'s", "allowed", "to"], ["am", "allowed", "to"], ["'m", "allowed", "to"],
    ["are", "allowed", "to"], ["'re", "allowed", "to"], ["was", "allowed", "to"],
    ["were", "allowed", "to"], ["been", "allowed", "to"], ["being", "allowed", "to"]
  ],
  "prediction_modals": [
    ["will"], ["would"], ["shall"], ["sha"], ["wo"], ["is", "going", "to"],
    ["'s", "going", "to"], ["are", "going", "to"], ["'re", "going", "to"],
    ["am", "going", "to"], ["'m", "going", "to"], ["be", "going", "to"],
    ["was", "going", "to"], ["were", "going", "to"], ["been", "going", "to"],
    ["be", "about", "to"], ["am", "about", "to"], ["are", "about", "to"],
    ["is", "about", "to"], ["'m", "about", "to"], ["'s", "about", "to"],
    ["'re", "about", "to"], ["being", "about", "to"], ["was", "about", "to"],
    ["were", "about", "to"]
  ],
  "post_nominal_domains": {
    "SUA": [
      "advanced", "advocated", "argued", "arranged", "conceded", "demanded", "desired",
      "drawn", "enjoined", "granted", "intended", "ordained", "ordered", "persuaded",
      "proposed", "provided", "recommended", "reminded", "requested", "resolved", "resulted",
      "undertaken", "urged"
    ],
    "PUB": [
      "acknowledged", "added", "admitted", "advised", "agreed", "alleged", "announced",
      "answered", "asked", "asserted", "assured", "boasted", "bought", "charged", "claimed",
      "complained", "confirmed", "contended", "declared", "denied", "displayed", "drafted",
      "emphasised", "emphasized", "explained", "expressed", "guaranteed", "hinted", "honoured",
      "informed", "insisted", "intimated", "maintained", "mentioned", "misled", "objected",
      "pleaded", "predicted", "promised", "protested", "questioned", "recorded", "remarked",
      "replied", "reported", "said", "shouted", "signalled", "stated", "stressed", "submitted",
      "suggested", "sworn", "telephoned", "testified", "told", "warned"
    ],
    "PRV": [
      "accepted", "anticipated", "appreciated", "assumed", "believed", "calculated",
      "concerned", "concluded", "confessed", "considered", "decided", "defined",
      "demonstrated", "determined", "discovered", "doubted", "ensured", "established",
      "estimated", "expected", "feared", "felt", "followed", "forgotten", "found", "grasped",
      "heard", "held", "hoped", "imagined", "implied", "indicated", "judged", "known",
      "learned", "learnt", "meant", "noted", "noticed", "observed", "perceived", "persisted",
      "prayed", "preferred", "presumed", "presupposed", "pretended", "proven", "reached",
      "read", "realised", "realized", "reasoned", "recalled", "reckoned", "recognised",
      "recognized", "reflected", "remembered", "revealed", "saw", "seen", "sensed", "showed",
      "shown", "succeeded", "supposed", "suspected", "thought", "understood", "used", "wished",
      "worried", "written"
    ]
  },
  "post_nominal_exceptions": [
    "absconded", "abstained", "accorded", "acquiesced", "allied", "allotted", "amounted",
    "appeared", "arrayed", "aspired", "attuned", "averaged", "behaved", "belonged",
    "bequeathed", "blossomed", "bonded", "bordered", "bowed", "bruised", "buffered", "ceased",
    "cited", "coexisted", "coincided", "collapsed", "compounded", "condoned", "conferred",
    "connected", "consecrated", "consisted", "constricted", "contended", "contributed",
    "converged", "dated", "declined", "delineated", "demanded", "demarcated", "depended",
    "deteriorated", "deviated", "differed", "disagreed", "dislocated", "distilled", "donated",
    "dwarfed", "dwindled", "elapsed", "emanated", "embodied", "emerged", "emigrated",
    "emitted", "enacted", "encumbered", "endeavoured", "engendered", "enjoyed", "ensued",
    "ensured", "entailed", "erupted", "espoused", "exerted", "existed", "expended",
    "extrapolated", "failed", "fared", "fashioned", "figured", "flanked", "flattened", "fled",
    "flourished", "harvested", "idealised", "incurred", "induced", "inflicted", "inhabited",
    "insisted", "instilled", "interacted", "intervened", "invaded", "irradiated", "lacked",
    "lamented", "lasted", "lavished", "matured", "occurred", "officiated", "opted",
    "originated", "oscillated", "partaken", "partitioned", "perpetrated", "persisted",
    "perturbed", "pervaded", "plummeted", "plunged", "portrayed", "predominated", "prevailed",
    "proliferated", "pursued", "receded", "recurred", "refrained", "remained", "resembled",
    "resided", "resigned", "responded", "rested", "resulted", "retaliated", "retreated",
    "reverted", "revisited", "risen", "sewn", "showed", "slung", "snared", "soared", "sown",
    "spaced", "spanned", "stemmed", "stilled", "subscribed", "sued", "suffered", "sufficed",
    "surfaced", "surrendered", "surveyed", "tabulated", "tempered", "tended", "testified",
    "totalled", "trebled", "vacated", "vanished", "vested", "wished", "woven", "wrought",
    "yielded"
  ]
}
"#;

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn test_default_resource() {
    assert!(default_resource(TAG_MATCH_FILE).is_some());
    assert!(default_resource(LEXICON_FILE).is_some());
    assert!(default_resource("passiveRange").is_none());
  }

  #[test]
  fn test_settings_json_is_valid() {
    let settings: serde_json::Value = serde_json::from_str(SETTINGS_JSON).unwrap();
    assert_eq!(6, settings["tagVectorWidth"]);
    assert_eq!(7, settings["annotationPass"].as_array().unwrap().len());
    let lexicon: serde_json::Value = serde_json::from_str(LEXICON_JSON).unwrap();
    assert!(lexicon.is_object());
  }

  #[test]
  fn test_write_resources_keeps_existing_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lexicon.json"), "{}").unwrap();
    let written = write_resources(dir.path()).unwrap();
    assert_eq!(5, written.len());
    assert!(!written.contains(&"lexicon.json"));
    assert_eq!("{}", fs::read_to_string(dir.path().join("lexicon.json")).unwrap());
    assert!(dir.path().join(SETTINGS_FILE_NAME).is_file());
    assert!(write_resources(dir.path()).unwrap().is_empty());
  }
}
