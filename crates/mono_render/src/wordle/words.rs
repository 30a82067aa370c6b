//! Embedded vocabulary. Every entry is five uppercase ASCII letters.

/// Words a game may pick as its secret.
pub const TARGET_WORDS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ACUTE", "ADMIT", "ADOPT", "ADULT", "AFTER", "AGAIN", "AGENT",
    "AGREE", "AHEAD", "ALARM", "ALBUM", "ALERT", "ALIKE", "ALIVE", "ALLOW", "ALONE", "ALONG",
    "ALTER", "AMONG", "ANGER", "ANGLE", "ANGRY", "APART", "APPLE", "APPLY", "ARENA", "ARGUE",
    "ARISE", "ARRAY", "ASIDE", "ASSET", "AUDIO", "AVOID", "AWARD", "AWARE", "BADLY", "BAKER",
    "BASIC", "BASIS", "BEACH", "BEGAN", "BEGIN", "BEING", "BELOW", "BENCH", "BIRTH", "BLACK",
    "BLAME", "BLIND", "BLOCK", "BLOOD", "BOARD", "BOOST", "BRAIN", "BRAND", "BREAD", "BREAK",
    "BRICK", "BRIEF", "BRING", "BROAD", "BROWN", "BUILD", "BUYER", "CABLE", "CARRY", "CATCH",
    "CAUSE", "CHAIN", "CHAIR", "CHART", "CHASE", "CHEAP", "CHECK", "CHEST", "CHIEF", "CHILD",
    "CHOSE", "CIVIL", "CLAIM", "CLASS", "CLEAN", "CLEAR", "CLIMB", "CLOCK", "CLOSE", "CLOUD",
    "COACH", "COAST", "COULD", "COUNT", "COURT", "COVER", "CRAFT", "CRANE", "CRASH", "CREAM",
    "CRIME", "CROSS", "CROWD", "CROWN", "CURVE", "CYCLE", "DAILY", "DANCE", "DEATH", "DELAY",
    "DEPTH", "DOUBT", "DOZEN", "DRAFT", "DRAMA", "DREAM", "DRESS", "DRINK", "DRIVE", "EAGER",
    "EARLY", "EARTH", "EIGHT", "ELITE", "EMPTY", "ENEMY", "ENJOY", "ENTER", "ENTRY", "EQUAL",
    "ERROR", "EVENT", "EVERY", "EXACT", "EXIST", "EXTRA", "FAITH", "FALSE", "FAULT", "FIELD",
    "FIFTY", "FIGHT", "FINAL", "FIRST", "FLAME", "FLASH", "FLOOR", "FLUID", "FOCUS", "FORCE",
    "FORTH", "FOUND", "FRAME", "FRESH", "FRONT", "FRUIT", "FUNNY", "GHOST", "GIANT", "GIVEN",
    "GLASS", "GLOBE", "GRACE", "GRADE", "GRAND", "GRANT", "GRASS", "GREAT", "GREEN", "GROSS",
    "GROUP", "GUARD", "GUESS", "GUEST", "GUIDE", "HAPPY", "HEART", "HEAVY", "HORSE", "HOTEL",
    "HOUSE", "HUMAN", "IDEAL", "IMAGE", "INDEX", "INNER", "INPUT", "ISSUE", "JOINT", "JUDGE",
    "KNIFE", "LARGE", "LASER", "LATER", "LAUGH", "LAYER", "LEARN", "LEAST", "LEAVE", "LEGAL",
    "LEMON", "LEVEL", "LIGHT", "LIMIT", "LOCAL", "LOGIC", "LOOSE", "LUCKY", "LUNCH", "MAGIC",
    "MAJOR", "MAKER", "MARCH", "MATCH", "MAYBE", "MAYOR", "MEDIA", "METAL", "MIGHT", "MINOR",
    "MODEL", "MONEY", "MONTH", "MORAL", "MOTOR", "MOUNT", "MOUSE", "MOUTH", "MOVIE", "MUSIC",
    "NEVER", "NIGHT", "NOISE", "NORTH", "NOVEL", "NURSE", "OCEAN", "OFFER", "OFTEN", "ORDER",
    "OTHER", "OUGHT", "OWNER", "PAINT", "PANEL", "PAPER", "PARTY", "PEACE", "PHASE", "PHONE",
    "PHOTO", "PIANO", "PIECE", "PILOT", "PITCH", "PLACE", "PLAIN", "PLANE", "PLANT", "PLATE",
    "POINT", "POUND", "POWER", "PRESS", "PRICE", "PRIDE", "PRIME", "PRINT", "PRIOR", "PRIZE",
    "PROOF", "PROUD", "PROVE", "QUEEN", "QUICK", "QUIET", "QUITE", "RADIO", "RAISE", "RANGE",
    "RAPID", "RATIO", "REACH", "READY", "REFER", "RIGHT", "RIVAL", "RIVER", "ROBOT", "ROUGH",
    "ROUND", "ROUTE", "ROYAL", "RURAL", "SCALE", "SCENE", "SCOPE", "SCORE", "SENSE", "SERVE",
    "SEVEN", "SHALL", "SHAPE", "SHARE", "SHARP", "SHEET", "SHELF", "SHELL", "SHIFT", "SHIRT",
    "SHOCK", "SHOOT", "SHORT", "SHOWN", "SIGHT", "SINCE", "SKILL", "SLATE", "SLEEP", "SLIDE",
    "SMALL", "SMART", "SMILE", "SMOKE", "SOLID", "SOLVE", "SORRY", "SOUND", "SOUTH", "SPACE",
    "SPARE", "SPEAK", "SPEED", "SPEND", "SPENT", "SPLIT", "SPORT", "STAFF", "STAGE", "STAKE",
    "STAND", "START", "STATE", "STEAM", "STEEL", "STICK", "STILL", "STOCK", "STONE", "STOOD",
    "STORE", "STORM", "STORY", "STRIP", "STUCK", "STUDY", "STUFF", "STYLE", "SUGAR", "SUITE",
    "SUPER", "SWEET", "TABLE", "TAKEN", "TASTE", "TEACH", "TEETH", "THANK", "THEFT", "THEIR",
    "THEME", "THERE", "THESE", "THICK", "THING", "THINK", "THIRD", "THOSE", "THREE", "THREW",
    "THROW", "TIGHT", "TIMER", "TITLE", "TODAY", "TOPIC", "TOTAL", "TOUCH", "TOUGH", "TOWER",
    "TRACK", "TRADE", "TRAIN", "TREAT", "TREND", "TRIAL", "TRIED", "TRUCK", "TRULY", "TRUST",
    "TRUTH", "TWICE", "UNDER", "UNION", "UNITY", "UNTIL", "UPPER", "UPSET", "URBAN", "USAGE",
    "USUAL", "VALID", "VALUE", "VIDEO", "VIRUS", "VISIT", "VITAL", "VOICE", "WASTE", "WATCH",
    "WATER", "WHEEL", "WHERE", "WHICH", "WHILE", "WHITE", "WHOLE", "WHOSE", "WOMAN", "WORLD",
    "WORRY", "WORSE", "WORST", "WORTH", "WOULD", "WOUND", "WRITE", "WRONG", "WROTE", "YIELD",
    "YOUNG", "YOUTH",
];

/// Further words accepted as guesses but never picked as targets.
pub const EXTRA_GUESSES: &[&str] = &[
    "AAHED", "ABACK", "ABASE", "ABBEY", "ABBOT", "ABHOR", "ABIDE", "ABLED", "ABODE", "ABORT",
    "ABYSS", "ACORN", "ACRID", "ADAGE", "ADEPT", "ADMIN", "ADORE", "ADORN", "AFFIX", "AFIRE",
    "AFOOT", "AGAPE", "AGATE", "AGILE", "AGING", "AGLOW", "AGONY", "AISLE", "ALGAE", "ALIBI",
    "ALIEN", "ALIGN", "ALLEY", "ALLOT", "ALLOY", "ALOFT", "ALOOF", "ALOUD", "ALPHA", "ALTAR",
    "AMASS", "AMAZE", "AMBER", "AMBLE", "AMEND", "AMPLE", "AMUSE", "ANGEL", "ANKLE", "ANNEX",
    "ANNOY", "ANVIL", "AORTA", "APHID", "APNEA", "ARBOR", "ARDOR", "AROMA", "ARROW", "ASCOT",
    "ASHEN", "ASKEW", "ATOLL", "ATONE", "ATTIC", "AUDIT", "AUGUR", "AVAIL", "AVERT", "AWAIT",
    "AWAKE", "AWASH", "AWFUL", "AXIOM", "AZURE", "BACON", "BADGE", "BAGEL", "BALMY", "BANAL",
    "BANJO", "BARGE", "BARON", "BASIL", "BASIN", "BATCH", "BATON", "BAYOU", "BEADY", "BEARD",
    "BEAST", "BEEFY", "BEFIT", "BEGET", "BELCH", "BELLY", "BERET", "BERRY", "BIGOT", "BINGE",
    "BISON", "BLAND", "BLANK", "BLARE", "BLAST", "BLAZE", "BLEAK", "BLEED", "BLEND", "BLESS",
    "BLIMP", "BLINK", "BLISS", "BLOAT", "BLOKE", "BLOND", "BLOOM", "BLUFF", "BLUNT", "BLURB",
    "BLUSH", "BOAST", "BONUS", "BOOTH", "BOOZE", "BOUGH", "BOXER", "BRACE", "BRAID", "BRAKE",
    "BRASH", "BRASS", "BRAVE", "BRAWL", "BREED", "BRIAR", "BRIBE", "BRINE", "BRINK", "BRISK",
    "BROOD", "BROOK", "BROOM", "BROTH", "BRUNT", "BRUSH", "BUDDY", "BUDGE", "BUGLE", "BULGE",
    "BULKY", "BULLY", "BUNCH", "BURLY", "BURNT", "BURST", "CACHE", "CADET", "CAMEL", "CAMEO",
    "CANAL", "CANDY", "CANOE", "CAPER", "CARGO", "CAROL", "CATER", "CEDAR", "CHAFE", "CHALK",
    "CHAMP", "CHANT", "CHAOS", "CHARM", "CHEEK", "CHEER", "CHESS", "CHICK", "CHIDE", "CHILI",
    "CHILL", "CHIME", "CHIRP", "CHOIR", "CHOKE", "CHORD", "CHUNK", "CIDER", "CIGAR", "CINCH",
    "CLAMP", "CLANG", "CLASH", "CLASP", "CLERK", "CLICK", "CLIFF", "CLING", "CLOAK", "CLOWN",
    "CLUNG", "COBRA", "COCOA", "COMET", "COMIC", "CORAL", "COUCH", "COUGH", "CRACK", "CRAMP",
    "CRATE", "CRAVE", "CRAWL", "CRAZE", "CRAZY", "CREAK", "CREEK", "CREEP", "CREPE", "CREST",
    "CRISP", "CROAK", "CROOK", "CRUEL", "CRUMB", "CRUSH", "CRUST", "CRYPT", "CUBIC", "CURLY",
    "CURRY", "CYNIC", "DAISY", "DECAY", "DECOY", "DEITY", "DENIM", "DENSE", "DERBY", "DETER",
    "DEVIL", "DIARY", "DIGIT", "DINER", "DITCH", "DIZZY", "DODGE", "DOUGH", "DOWDY", "DRAIN",
    "DRAKE", "DRAWL", "DRIFT", "DRILL", "DROLL", "DRONE", "DROOL", "DROOP", "DROVE", "DROWN",
    "DRYER", "DUCHY", "DUNCE", "DWARF", "DWELL", "EASEL", "EBONY", "EERIE", "EGRET", "ELBOW",
    "ELDER", "ELECT", "ELFIN", "ELUDE", "EMBER", "ENACT", "ENDOW", "ENVOY", "EPOCH", "ERASE",
    "ERODE", "ESSAY", "ETHIC", "EVADE", "EXALT", "EXCEL", "EXERT", "EXILE", "EXPEL", "FABLE",
    "FACET", "FAINT", "FAIRY", "FANCY", "FARCE", "FEAST", "FEINT", "FELLA", "FEMUR", "FENCE",
    "FERRY", "FETCH", "FEVER", "FIBER", "FICUS", "FIEND", "FIERY", "FILTH", "FINCH", "FJORD",
    "FLAIR", "FLAKE", "FLANK", "FLASK", "FLEET", "FLESH", "FLICK", "FLING", "FLINT", "FLIRT",
    "FLOAT", "FLOCK", "FLOOD", "FLORA", "FLOUR", "FLOWN", "FLUKE", "FLUNG", "FLUTE", "FOAMY",
    "FOGGY", "FOLLY", "FORAY", "FORGE", "FORUM", "FOYER", "FRAUD", "FREAK", "FRISK", "FROCK",
    "FROND", "FROST", "FROTH", "FROZE", "FUDGE", "FUNGI", "GAUDY", "GAUGE", "GAUNT", "GAUZE",
    "GECKO", "GENRE", "GIDDY", "GIRTH", "GLAND", "GLARE", "GLAZE", "GLEAM", "GLIDE", "GLINT",
    "GLOAT", "GLOOM", "GLORY", "GLOSS", "GLOVE", "GNASH", "GNOME", "GOOSE", "GORGE", "GOUGE",
    "GOURD", "GRAIN", "GRAPE", "GRAPH", "GRASP", "GRATE", "GRAVE", "GRAVY", "GRAZE", "GREED",
    "GREET", "GRIEF", "GRILL", "GRIME", "GRIND", "GRIPE", "GROAN", "GROIN", "GROOM", "GROPE",
    "GROUT", "GROWL", "GRUEL", "GRUFF", "GUILD", "GUILE", "GUILT", "GUISE", "GULCH", "GUSTO",
    "HAIKU", "HARSH", "HASTE", "HATCH", "HAUNT", "HAVEN", "HAVOC", "HAZEL", "HEAVE", "HEDGE",
    "HEIST", "HELIX", "HERON", "HINGE", "HIPPO", "HOARD", "HOBBY", "HOIST", "HONEY", "HONOR",
    "HOUND", "HOVER", "HUMID", "HUMOR", "HUNCH", "HURRY", "HYENA", "IGLOO", "IMPLY", "INEPT",
    "INFER", "INGOT", "INLET", "IRATE", "IRONY", "IVORY", "JAUNT", "JEANS", "JELLY", "JEWEL",
    "JOLLY", "JOUST", "JUICE", "JUICY", "JUMBO", "KARMA", "KAYAK", "KNACK", "KNEAD", "KNEEL",
    "KNELT", "KNOCK", "KNOLL", "KOALA", "LABEL", "LADLE", "LAGER", "LANCE", "LAPSE", "LATCH",
    "LEAFY", "LEAKY", "LEASH", "LEDGE", "LEECH", "LIBEL", "LILAC", "LINEN", "LINER", "LLAMA",
    "LOBBY", "LODGE", "LOFTY", "LOOPY", "LOVER", "LOYAL", "LUNAR", "LUNGE", "LURCH", "LYRIC",
    "MACRO", "MADAM", "MANGO", "MANOR", "MAPLE", "MARSH", "MEDAL", "MELON", "MERCY", "MERIT",
    "MERRY", "MIDST", "MIMIC", "MINCE", "MIRTH", "MOIST", "MOLAR", "MOOSE", "MORPH", "MOSSY",
    "MOTIF", "MOTTO", "MOULD", "MOURN", "MUDDY", "MUMMY", "MURAL", "MUSHY", "MUSKY", "NAIVE",
    "NASAL", "NASTY", "NAVAL", "NERVE", "NEWLY", "NICHE", "NINJA", "NOBLE", "NUDGE", "NYMPH",
    "OAKEN", "OASIS", "OCCUR", "ODDLY", "OLIVE", "ONION", "ONSET", "OPERA", "OPTIC", "ORBIT",
    "ORGAN", "OTTER", "OUNCE", "OVOID", "OXIDE", "OZONE", "PADDY", "PAGAN", "PALSY", "PANIC",
    "PASTA", "PATIO", "PAUSE", "PEACH", "PEARL", "PECAN", "PEDAL", "PENNY", "PERCH", "PERIL",
    "PETAL", "PIETY", "PINCH", "PIXEL", "PIZZA", "PLAID", "PLAZA", "PLEAD", "PLUCK", "PLUMB",
    "PLUME", "PLUSH", "POLKA", "POSSE", "POUCH", "POUTY", "PRANK", "PRAWN", "PRICK", "PROBE",
    "PRONE", "PROSE", "PROWL", "PRUNE", "PSALM", "PULSE", "PUNCH", "PUPIL", "PURGE", "QUACK",
    "QUAIL", "QUAKE", "QUALM", "QUART", "QUASH", "QUERY", "QUEST", "QUEUE", "QUILL", "QUIRK",
    "QUOTA", "QUOTE", "RABBI", "RADAR", "RAINY", "RALLY", "RAVEN", "RAYON", "RAZOR", "REALM",
    "REBEL", "RECAP", "REGAL", "RELAX", "RELIC", "REMIT", "RENEW", "REPAY", "RERUN", "RESIN",
    "RETRO", "REVEL", "RHYME", "RIDGE", "RIFLE", "RINSE", "RIPEN", "RISKY", "RIVET", "ROAST",
    "ROBIN", "ROCKY", "RODEO", "ROGUE", "ROOST", "ROUSE", "ROWDY", "RUDDY", "RUGBY", "RUMOR",
    "SAINT", "SALAD", "SALON", "SALSA", "SALTY", "SANDY", "SASSY", "SAUCE", "SAUNA", "SAVOR",
    "SCALD", "SCALP", "SCANT", "SCARE", "SCARF", "SCOLD", "SCONE", "SCOOP", "SCOUT", "SCOWL",
    "SCRAP", "SCRUB", "SEDAN", "SEIZE", "SERUM", "SHADE", "SHAFT", "SHAKE", "SHALE", "SHAME",
    "SHARK", "SHAWL", "SHEEN", "SHEEP", "SHIED", "SHINE", "SHINY", "SHIRE", "SHONE", "SHOUT",
    "SHOVE", "SHRUB", "SHRUG", "SIEGE", "SIGMA", "SILKY", "SISSY", "SKATE", "SKIER", "SKIFF",
    "SKULL", "SKUNK", "SLACK", "SLAIN", "SLANG", "SLANT", "SLASH", "SLEEK", "SLEET", "SLEPT",
    "SLICE", "SLIME", "SLING", "SLOPE", "SLOTH", "SLUMP", "SLUNG", "SLURP", "SMACK", "SMASH",
    "SMEAR", "SMELL", "SMIRK", "SNACK", "SNAIL", "SNAKE", "SNARE", "SNARL", "SNEAK", "SNIFF",
    "SNORE", "SNOUT", "SOBER", "SONIC", "SOOTH", "SPADE", "SPANK", "SPASM", "SPAWN", "SPEAR",
    "SPECK", "SPICE", "SPICY", "SPIKE", "SPILL", "SPINE", "SPITE", "SPOIL", "SPOKE", "SPOON",
    "SPRAY", "SPREE", "SQUAD", "SQUAT", "SQUID", "STAIN", "STAIR", "STALE", "STALK", "STALL",
    "STAMP", "STANK", "STARE", "STARK", "STASH", "STEAK", "STEAL", "STEEP", "STEER", "STERN",
    "STING", "STINK", "STOIC", "STOMP", "STOOL", "STOUT", "STRAW", "STRAY", "STRUT", "STUNG",
    "STUNK", "SULKY", "SUNNY", "SURGE", "SWAMP", "SWARM", "SWEAR", "SWEAT", "SWEEP", "SWELL",
    "SWEPT", "SWIFT", "SWINE", "SWING", "SWIRL", "SWOON", "SWORD", "SWORE", "SWORN", "SYRUP",
    "TABOO", "TACIT", "TALON", "TANGO", "TANGY", "TAPER", "TARDY", "TAROT", "TAUNT", "TAWNY",
    "TEARY", "TEASE", "TEMPO", "TENOR", "TENSE", "TENTH", "TEPID", "THIEF", "THIGH", "THORN",
    "THUMB", "THUMP", "TIARA", "TIDAL", "TIGER", "TILDE", "TIPSY", "TOAST", "TODDY", "TONIC",
    "TOOTH", "TORCH", "TOXIC", "TRACT", "TRAIL", "TRAIT", "TRAMP", "TRASH", "TRAWL", "TRIBE",
    "TRICK", "TROLL", "TROOP", "TROUT", "TRUCE", "TRUNK", "TRYST", "TULIP", "TUMOR", "TUNIC",
    "TWANG", "TWEAK", "TWEED", "TWIRL", "TWIST", "ULCER", "ULTRA", "UNCLE", "UNCUT", "UNFIT",
    "UNLIT", "UNZIP", "USHER", "UTTER", "VAGUE", "VALET", "VALOR", "VALVE", "VAPOR", "VAULT",
    "VENOM", "VERGE", "VERSE", "VIGOR", "VINYL", "VIOLA", "VIPER", "VISOR", "VIVID", "VOCAL",
    "VODKA", "VOUCH", "VOWEL", "WACKY", "WAGON", "WAIST", "WALTZ", "WEARY", "WEAVE", "WEDGE",
    "WEIRD", "WHALE", "WHEAT", "WHIFF", "WHIRL", "WHISK", "WIDEN", "WIDOW", "WIDTH", "WIELD",
    "WINCE", "WINDY", "WITCH", "WOKEN", "WORDY", "WRATH", "WREAK", "WRECK", "WREST", "WRING",
    "WRIST", "YACHT", "YEARN", "YEAST", "ZEBRA", "ZESTY",
];
